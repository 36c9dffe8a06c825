use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `PSEUDO_LOG` or `RUST_LOG` is set, e.g.
/// `PSEUDO_LOG=pseudo_eval=debug pseudo run main.psd`. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("PSEUDO_LOG").or_else(|_| EnvFilter::try_from_default_env());
        let Ok(filter) = filter else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);
        let _ = tracing_subscriber::registry().with(filter).with(tree).try_init();
    });
}
