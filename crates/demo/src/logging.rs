//! Logging subscriber initialisation.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Events go to the browser console on `wasm32` and to stderr elsewhere.
/// Timestamps are left out; the console adds its own and `wasm32` has no
/// system clock.
pub(crate) fn init(directives: &str) -> Result<(), String> {
    let filter = build_env_filter(directives)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::ConsoleMakeWriter);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.with_writer(std::io::stderr);

    builder.try_init().map_err(|error| error.to_string())
}

fn build_env_filter(directives: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(format!("warn,cartview={directives},cartview_demo={directives}"))
        .map_err(|error| format!("Invalid log filter {directives:?}: {error}"))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    /// Hands out one [`ConsoleWriter`] per event.
    #[derive(Debug, Clone, Copy)]
    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and logs it to the browser console.
    #[derive(Debug, Default)]
    pub(super) struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn emit(&mut self) {
            if self.buffer.is_empty() {
                return;
            }

            let line = String::from_utf8_lossy(&self.buffer);

            web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line.trim_end()));

            self.buffer.clear();
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.emit();

            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            self.emit();
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::default()
        }
    }
}
