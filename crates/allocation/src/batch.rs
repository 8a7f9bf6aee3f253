use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use stockline_core::{BatchReference, Entity, Sku};

use crate::order_line::OrderLine;

/// Entity: a purchased lot of a single SKU.
///
/// Identity is the batch reference. Equality and hashing ignore every other
/// field, so a batch keeps its identity while its allocations change.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: BatchReference,
    sku: Sku,
    purchased_quantity: u32,
    /// `None` means the stock is already in the warehouse.
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchReference>,
        sku: impl Into<Sku>,
        purchased_quantity: u32,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchReference {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn purchased_quantity(&self) -> u32 {
        self.purchased_quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Lines currently committed against this batch, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn allocated_quantity(&self) -> u32 {
        self.allocations.iter().map(OrderLine::qty).sum()
    }

    pub fn available_quantity(&self) -> u32 {
        // `allocate` only commits lines that fit, so this cannot underflow.
        self.purchased_quantity - self.allocated_quantity()
    }

    /// Same SKU and enough stock left (an exact fit counts).
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == *line.sku() && self.available_quantity() >= line.qty()
    }

    /// Commit `line` against this batch.
    ///
    /// Ineligible lines are ignored. Allocating a line that is already
    /// committed is a no-op.
    pub fn allocate(&mut self, line: &OrderLine) {
        if self.is_allocated(line) {
            return;
        }
        if !self.can_allocate(line) {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                qty = line.qty(),
                available = self.available_quantity(),
                "order line does not fit batch; skipped"
            );
            return;
        }
        self.allocations.insert(line.clone());
    }

    /// Release `line` if it was committed here; otherwise a no-op.
    pub fn deallocate(&mut self, line: &OrderLine) {
        self.allocations.remove(line);
    }

    /// Sort key for allocation priority.
    ///
    /// Warehouse stock (`None`) orders before any shipment, and shipments
    /// order by arrival date. Batches without an ETA share the same key.
    /// Use with a stable sort; this is deliberately not an `Ord` impl, since
    /// batch equality is by reference.
    pub fn priority_key(&self) -> Option<NaiveDate> {
        self.eta
    }
}

impl Entity for Batch {
    type Id = BatchReference;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl Hash for Batch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}
