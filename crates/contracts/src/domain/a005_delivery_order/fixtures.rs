//! Демонстрационные назначения курьера страницы "My Orders"

use super::aggregate::{DeliveryOrder, DeliveryStatus};

pub fn demo_delivery_orders() -> Vec<DeliveryOrder> {
    vec![
        DeliveryOrder {
            id: "DEL001".to_string(),
            customer_name: "John Doe".to_string(),
            customer_phone: "+1234567890".to_string(),
            address: "123 Main St, Downtown".to_string(),
            items: 3,
            amount: 299.99,
            status: DeliveryStatus::Pending,
            distance_km: 2.5,
            estimated_minutes: 15,
        },
        DeliveryOrder {
            id: "DEL002".to_string(),
            customer_name: "Jane Smith".to_string(),
            customer_phone: "+1234567891".to_string(),
            address: "456 Oak Ave, Uptown".to_string(),
            items: 2,
            amount: 159.99,
            status: DeliveryStatus::PickedUp,
            distance_km: 4.2,
            estimated_minutes: 25,
        },
        DeliveryOrder {
            id: "DEL003".to_string(),
            customer_name: "Bob Johnson".to_string(),
            customer_phone: "+1234567892".to_string(),
            address: "789 Pine Rd, Midtown".to_string(),
            items: 5,
            amount: 449.99,
            status: DeliveryStatus::InTransit,
            distance_km: 3.8,
            estimated_minutes: 20,
        },
    ]
}
