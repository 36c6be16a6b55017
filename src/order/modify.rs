use crate::response::{checked_root, ResponseShape};

const SHAPE: ResponseShape = ResponseShape {
    header: "OrderResponseHeader",
    error_context: "There was an error modifying the order",
};

/// Response to a `ModifyOrder` request.
///
/// A successful modification carries no payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifyOrder;

impl ModifyOrder {
    pub fn response(&self, xml: &[u8]) -> eyre::Result<()> {
        checked_root(xml, &SHAPE)?;
        Ok(())
    }
}
