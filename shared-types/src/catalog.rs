use serde::{Deserialize, Serialize};

/// A repair offering from the shop's fixed catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: u32,
}

impl Service {
    fn new(id: &str, name: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    /// Label used in the service dropdown, e.g. "Basic Tune-Up - $75".
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

pub const DEFAULT_SERVICE_ID: &str = "basic-tune-up";

/// Appointment slots offered every open day.
pub const AVAILABLE_TIMES: [&str; 6] = [
    "09:00 AM", "10:30 AM", "12:00 PM", "01:30 PM", "03:00 PM", "04:30 PM",
];

/// The four services the shop offers. Defined at startup, never changes.
pub fn bike_services() -> Vec<Service> {
    vec![
        Service::new("basic-tune-up", "Basic Tune-Up", 75),
        Service::new("general-tire-repair", "General Tire Repair", 25),
        Service::new("brake-adjustment", "Brake Adjustment", 40),
        Service::new("custom-build", "Custom Bike Building", 250),
    ]
}

pub fn find_service(id: &str) -> Option<Service> {
    bike_services().into_iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_fixed_services() {
        let services = bike_services();
        assert_eq!(services.len(), 4);
        assert_eq!(
            services.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec![
                "basic-tune-up",
                "general-tire-repair",
                "brake-adjustment",
                "custom-build"
            ]
        );
    }

    #[test]
    fn find_service_returns_recorded_name_and_price() {
        let service = find_service("general-tire-repair").unwrap();
        assert_eq!(service.name, "General Tire Repair");
        assert_eq!(service.price, 25);
        assert_eq!(service.label(), "General Tire Repair - $25");
    }

    #[test]
    fn find_service_rejects_unknown_id() {
        assert!(find_service("frame-respray").is_none());
    }

    #[test]
    fn six_time_slots_offered() {
        assert_eq!(AVAILABLE_TIMES.len(), 6);
        assert_eq!(AVAILABLE_TIMES[1], "10:30 AM");
    }
}
