use anyhow::Result;

/// Triggers whatever turns the on-screen content to its next page.
pub trait PageAdvancer: Send + Sync {
    fn advance_to_next_page(&self) -> Result<()>;
}
