/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use vas_admin_lib::modules::vas::domain::{Updater, VasRecord};

pub struct VasFactory {
    record: VasRecord,
}

impl VasFactory {
    pub fn named(id: &str, name: &str) -> Self {
        Self {
            record: VasRecord::new(id, name),
        }
    }

    /// Fully populated record, the way the list query returns it
    pub fn complete(id: &str, name: &str) -> Self {
        Self::named(id, name)
            .description(&format!("{} service", name))
            .guide("MANUAL", &format!("Do the {}", name.to_lowercase()))
            .uom("EA")
            .currency("USD")
            .price(9.5)
            .updater("admin")
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.description = Some(description.to_string());
        self
    }

    pub fn guide(mut self, guide_type: &str, guide: &str) -> Self {
        self.record.operation_guide_type = Some(guide_type.to_string());
        self.record.operation_guide = Some(guide.to_string());
        self
    }

    pub fn uom(mut self, uom: &str) -> Self {
        self.record.uom = Some(uom.to_string());
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.record.currency = Some(currency.to_string());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.record.default_price = Some(price);
        self
    }

    pub fn updater(mut self, name: &str) -> Self {
        self.record.updater = Some(Updater {
            name: Some(name.to_string()),
            description: None,
        });
        self
    }

    pub fn build(self) -> VasRecord {
        self.record
    }
}

/// `count` complete records with ids `v1..=vN`
pub fn catalog(count: usize) -> Vec<VasRecord> {
    (1..=count)
        .map(|n| VasFactory::complete(&format!("v{}", n), &format!("Service {:02}", n)).build())
        .collect()
}
