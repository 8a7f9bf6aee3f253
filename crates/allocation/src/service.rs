//! Allocation service: choose a batch for an order line and commit it.

use stockline_core::BatchReference;

use crate::batch::Batch;
use crate::error::AllocationError;
use crate::order_line::OrderLine;

/// Allocate `line` to the highest-priority batch that can take it.
///
/// Candidates are ranked warehouse stock first, then shipments by earliest
/// ETA; ties keep their input order. The first eligible batch is mutated and
/// its reference returned. The caller's collection is not reordered.
///
/// Selection is a single greedy pass: a line is never split across batches.
///
/// # Errors
///
/// [`AllocationError::OutOfStock`] when no candidate can take the line (wrong
/// SKU or not enough stock anywhere). No batch is touched in that case.
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> Result<BatchReference, AllocationError>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let mut candidates: Vec<&mut Batch> = batches.into_iter().collect();
    candidates.sort_by_key(|batch| batch.priority_key());

    let Some(batch) = candidates
        .into_iter()
        .find(|batch| batch.can_allocate(line))
    else {
        tracing::warn!(
            order_id = %line.order_id(),
            sku = %line.sku(),
            qty = line.qty(),
            "no batch can satisfy order line"
        );
        return Err(AllocationError::out_of_stock(line.sku().clone()));
    };

    batch.allocate(line);
    tracing::info!(
        order_id = %line.order_id(),
        sku = %line.sku(),
        qty = line.qty(),
        batch = %batch.reference(),
        "order line allocated"
    );
    Ok(batch.reference().clone())
}
