use thiserror::Error;

use stockline_core::Sku;

/// Failure of the allocation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// No candidate batch could take the requested line.
    #[error("out of stock for sku {sku}")]
    OutOfStock { sku: Sku },
}

impl AllocationError {
    pub fn out_of_stock(sku: Sku) -> Self {
        Self::OutOfStock { sku }
    }

    /// SKU the failed request was for.
    pub fn sku(&self) -> &Sku {
        match self {
            AllocationError::OutOfStock { sku } => sku,
        }
    }
}
