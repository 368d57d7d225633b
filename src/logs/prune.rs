//! Restart deduplication for history logs.
//!
//! After a failure or a planned segment boundary, MESA restarts from an earlier
//! checkpoint and re-appends rows whose `model_number` goes backward and then climbs
//! again through values already present in the file. The earlier, now-superseded rows
//! must be dropped so the kept `model_number` sequence is strictly increasing.
//!
//! The mask is built in a single backward pass over the ordering column alone: the last
//! row is always kept, and walking toward the start, a row is discarded when its step is
//! `>=` the running last-kept step. Model numbers are truncated to `i64` before the
//! comparison, so a row whose step **equals** an already-kept later step is discarded as
//! well (an exact re-log of the same step is superseded by the later segment).

use log::debug;

use crate::constants::MODEL_NUMBER_COLUMN;
use crate::logs::table_reader::ColumnTable;
use crate::mesalog_errors::MesaLogError;

/// Build the discard mask from the ordering column (`true` marks a superseded row).
///
/// Pure function of the ordering column; no other column influences the mask. Tables
/// with zero or one row yield an all-`false` mask.
pub(crate) fn restart_discard_mask(ordering: &[f64]) -> Vec<bool> {
    let mut discard = vec![false; ordering.len()];
    if ordering.len() < 2 {
        return discard;
    }

    let mut last = ordering[ordering.len() - 1] as i64;
    for i in (0..ordering.len() - 1).rev() {
        let step = ordering[i] as i64;
        if step >= last {
            discard[i] = true;
        } else {
            last = step;
        }
    }
    discard
}

/// Remove restart-superseded rows from a history table, in place.
///
/// Arguments
/// -----------------
/// * `table` – The freshly loaded table of a history log.
///
/// Return
/// ----------
/// * `Err(MesaLogError::MissingModelNumber)` when the `model_number` column is absent —
///   a schema violation on a history log, checked even for empty tables.
pub(crate) fn prune_restarts(table: &mut ColumnTable) -> Result<(), MesaLogError> {
    let ordering = table
        .column(MODEL_NUMBER_COLUMN)
        .map_err(|_| MesaLogError::MissingModelNumber)?;

    let discard = restart_discard_mask(ordering);
    let dropped = discard.iter().filter(|&&superseded| superseded).count();
    if dropped > 0 {
        table.discard_rows(&discard);
    }
    debug!("pruned {dropped} restart-superseded rows");

    Ok(())
}
