//! Logging observer for feature changes.

use toggler_core::FeatureObserver;

/// An observer that logs every change it is told about.
///
/// Emits an `info` event when the `tracing` feature is enabled and does
/// nothing otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl FeatureObserver for LoggingObserver {
    fn feature_did_change(&self, name: &str, is_enabled: bool) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(feature = name, is_enabled, "Feature changed");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (name, is_enabled); // Suppress unused warning
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ObserverPool;
    use std::sync::Arc;
    use toggler_core::{ChangeNotifier, FeatureBase, FeatureProxy, ObserverHandle, Subscription};

    #[test]
    fn test_pool_holds_logging_observer_weakly() {
        let observer = Arc::new(LoggingObserver);
        let mut pool = ObserverPool::new();
        pool.add_observer(ObserverHandle::from_arc(&observer), &Subscription::All);

        let proxy = FeatureProxy::new(FeatureBase::with_enabled((), true), false);
        pool.notify("Credits", &proxy);

        assert_eq!(Arc::strong_count(&observer), 1);
        assert_eq!(pool.wildcard_len(), 1);
    }

    #[cfg(feature = "tracing")]
    mod events {
        use super::*;
        use std::io;
        use std::sync::Mutex;
        use tracing_subscriber::layer::SubscriberExt;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Captured {
            fn output(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        fn capture(f: impl FnOnce()) -> String {
            let captured = Captured::default();
            let writer = captured.clone();
            let subscriber = tracing_subscriber::registry().with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(move || writer.clone()),
            );
            tracing::subscriber::with_default(subscriber, f);
            captured.output()
        }

        #[test]
        fn test_emits_info_event_per_change() {
            let output = capture(|| LoggingObserver.feature_did_change("Credits", true));

            assert!(output.contains("INFO"));
            assert!(output.contains("Feature changed"));
            assert!(output.contains("Credits"));
            assert!(output.contains("is_enabled=true"));
        }

        #[test]
        fn test_emits_event_when_notified_through_pool() {
            let observer = Arc::new(LoggingObserver);
            let mut pool = ObserverPool::new();
            pool.add_observer(
                ObserverHandle::from_arc(&observer),
                &Subscription::feature("Credits"),
            );
            let proxy = FeatureProxy::new(FeatureBase::new(()), false);

            let output = capture(|| pool.notify("Credits", &proxy));

            assert_eq!(output.matches("Feature changed").count(), 1);
            assert!(output.contains("is_enabled=false"));
        }
    }
}
