use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::interfaces::CheckoutWidget;

/// Load-once cell for the checkout script, shared by every flow on the page.
///
/// Concurrent callers wait on the same load. Success is remembered; a failed load
/// leaves the cell empty so the next caller tries again.
#[derive(Clone, Default)]
pub struct ScriptLoader {
    cell: Arc<OnceCell<()>>,
}

impl ScriptLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn ensure_loaded<W>(&self, widget: &W, src: &str) -> bool
    where
        W: CheckoutWidget + ?Sized,
    {
        self.cell
            .get_or_try_init(|| async {
                if widget.load_script(src).await {
                    log::debug!("checkout script loaded from {}", src);
                    Ok(())
                } else {
                    Err(())
                }
            })
            .await
            .is_ok()
    }
}
