use leptos::prelude::*;
use tracing::info;

use cartview::view::CartHost;

use crate::announce;

/// The demo app's side of the cart view contract.
#[derive(Clone, Copy)]
pub(crate) struct PanelHost {
    on_continue_shopping: Callback<()>,
    live_message: RwSignal<(u64, String)>,
}

impl PanelHost {
    pub(crate) fn new(
        on_continue_shopping: Callback<()>,
        live_message: RwSignal<(u64, String)>,
    ) -> Self {
        Self {
            on_continue_shopping,
            live_message,
        }
    }
}

impl CartHost for PanelHost {
    fn continue_shopping(&self) {
        self.on_continue_shopping.run(());
    }

    fn notify(&self, message: &str) {
        info!(notice = message, "showing notice");

        show_notice(message);

        announce(self.live_message, message.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn show_notice(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("window unavailable; notice not shown");

        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        tracing::warn!(error = ?error, "failed to show notice");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_notice(_message: &str) {}

#[cfg(test)]
mod tests {
    use cartview::view::CHECKOUT_NOTICE;

    use super::*;

    #[test]
    fn continue_shopping_runs_callback() {
        let calls = RwSignal::new(0_u32);
        let host = PanelHost::new(
            Callback::new(move |()| calls.update(|count| *count += 1)),
            RwSignal::new((0_u64, String::new())),
        );

        host.continue_shopping();

        assert_eq!(calls.get_untracked(), 1);
    }

    #[test]
    fn notify_announces_message() {
        let live_message = RwSignal::new((0_u64, String::new()));
        let host = PanelHost::new(Callback::new(|()| {}), live_message);

        host.notify(CHECKOUT_NOTICE);

        assert_eq!(live_message.get_untracked().1, CHECKOUT_NOTICE);
    }
}
