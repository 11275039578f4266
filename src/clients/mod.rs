pub mod fraud_client;

pub use fraud_client::FraudApiClient;
