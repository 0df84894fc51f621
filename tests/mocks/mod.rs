pub mod mock_geocoder;
pub mod mock_opener;
pub mod mock_position_provider;

#[allow(unused_imports)]
pub use mock_geocoder::MockGeocoder;
#[allow(unused_imports)]
pub use mock_opener::RecordingOpener;
#[allow(unused_imports)]
pub use mock_position_provider::MockPositionProvider;
