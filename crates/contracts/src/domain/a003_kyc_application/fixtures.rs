//! Демонстрационные KYC-заявки страницы "Seller KYC"

use chrono::NaiveDate;

use super::aggregate::{DocumentSet, KycApplication, KycStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn demo_applications() -> Vec<KycApplication> {
    vec![
        KycApplication {
            id: "KYC001".to_string(),
            seller_name: "John Smith".to_string(),
            business_name: "Smith Electronics".to_string(),
            email: "john@smithelectronics.com".to_string(),
            phone: "+1234567890".to_string(),
            business_type: "Retail".to_string(),
            tax_id: "TAX123456".to_string(),
            status: KycStatus::Pending,
            submitted_date: date(2024, 11, 14),
            documents: DocumentSet {
                business_license: true,
                tax_certificate: true,
                identity_proof: true,
                address_proof: true,
            },
            rejection_reason: None,
        },
        KycApplication {
            id: "KYC002".to_string(),
            seller_name: "Maria Garcia".to_string(),
            business_name: "Fashion Boutique".to_string(),
            email: "maria@fashionboutique.com".to_string(),
            phone: "+1234567891".to_string(),
            business_type: "Fashion".to_string(),
            tax_id: "TAX789012".to_string(),
            status: KycStatus::UnderReview,
            submitted_date: date(2024, 11, 13),
            documents: DocumentSet {
                business_license: true,
                tax_certificate: true,
                identity_proof: true,
                address_proof: false,
            },
            rejection_reason: None,
        },
        KycApplication {
            id: "KYC003".to_string(),
            seller_name: "David Lee".to_string(),
            business_name: "Home Essentials".to_string(),
            email: "david@homeessentials.com".to_string(),
            phone: "+1234567892".to_string(),
            business_type: "Home & Garden".to_string(),
            tax_id: "TAX345678".to_string(),
            status: KycStatus::Approved,
            submitted_date: date(2024, 11, 10),
            documents: DocumentSet {
                business_license: true,
                tax_certificate: true,
                identity_proof: true,
                address_proof: true,
            },
            rejection_reason: None,
        },
    ]
}
