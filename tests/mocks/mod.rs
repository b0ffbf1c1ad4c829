mod mock_delivery;

pub use mock_delivery::MockDelivery;
