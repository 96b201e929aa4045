use std::rc::Rc;

use orderflow_events::SubscriptionId;
use orderflow_reporting::{Report, ReportError, Reporter};
use orderflow_sales::Order;

/// Forwards status changes to a reporter as notifications.
///
/// Stateless apart from the reporter handle; cloning shares the same sink.
#[derive(Clone)]
pub struct NotificationService {
    reporter: Rc<dyn Reporter>,
}

impl NotificationService {
    pub fn new(reporter: Rc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    pub fn send_notification(&self, status: &str) -> Result<(), ReportError> {
        tracing::debug!(status, "sending notification");
        self.reporter.report(&Report::notification(status))
    }

    /// Subscribe this service to `order`'s status changes.
    ///
    /// Subscriber callbacks cannot return errors, so a reporter failure during
    /// delivery is logged and otherwise dropped.
    pub fn subscribe_to(&self, order: &mut Order) -> SubscriptionId {
        let service = self.clone();
        let order_number = order.order_number();
        order.subscribe(move |status| {
            if let Err(err) = service.send_notification(status) {
                tracing::error!(%order_number, status, error = %err, "notification not delivered");
            }
        })
    }
}

impl core::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_core::OrderNumber;
    use orderflow_reporting::MemoryReporter;
    use std::cell::Cell;

    /// Fails every other call, starting with the first.
    #[derive(Default)]
    struct FlakyReporter {
        calls: Cell<u32>,
        inner: MemoryReporter,
    }

    impl Reporter for FlakyReporter {
        fn report(&self, report: &Report) -> Result<(), ReportError> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n % 2 == 0 {
                return Err(ReportError::Unavailable("try again".to_string()));
            }
            self.inner.report(report)
        }
    }

    #[test]
    fn send_notification_reports_status() {
        let reporter = Rc::new(MemoryReporter::new());
        let service = NotificationService::new(reporter.clone());

        service.send_notification("order processed").unwrap();

        assert_eq!(reporter.lines(), vec!["notification: order processed"]);
    }

    #[test]
    fn subscribed_service_reports_each_status_change() {
        let reporter = Rc::new(MemoryReporter::new());
        let service = NotificationService::new(reporter.clone());
        let mut order = Order::new(OrderNumber::new(1));

        service.subscribe_to(&mut order);
        order.change_status("paid");
        order.change_status("shipped");

        assert_eq!(
            reporter.reports(),
            vec![Report::notification("paid"), Report::notification("shipped")]
        );
    }

    #[test]
    fn unsubscribed_service_stops_reporting() {
        let reporter = Rc::new(MemoryReporter::new());
        let service = NotificationService::new(reporter.clone());
        let mut order = Order::new(OrderNumber::new(2));

        let id = service.subscribe_to(&mut order);
        order.change_status("paid");
        assert!(order.unsubscribe(id));
        order.change_status("shipped");

        assert_eq!(reporter.lines(), vec!["notification: paid"]);
    }

    #[test]
    fn delivery_failure_does_not_stop_other_subscribers() {
        let flaky = Rc::new(FlakyReporter::default());
        let memory = Rc::new(MemoryReporter::new());
        let mut order = Order::new(OrderNumber::new(3));

        NotificationService::new(flaky.clone()).subscribe_to(&mut order);
        NotificationService::new(memory.clone()).subscribe_to(&mut order);

        assert_eq!(order.change_status("paid"), 2);
        assert!(flaky.inner.is_empty());
        assert_eq!(memory.lines(), vec!["notification: paid"]);

        order.change_status("shipped");
        assert_eq!(flaky.inner.lines(), vec!["notification: shipped"]);
    }
}
