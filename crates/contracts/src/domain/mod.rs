pub mod common;

pub mod a001_order;
pub mod a002_invoice;
pub mod a003_kyc_application;
pub mod a004_support_ticket;
pub mod a005_delivery_order;
pub mod a006_route_stop;
pub mod a007_earning;
pub mod a008_delivery_proof;
