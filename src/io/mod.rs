//! I/O layer: PNG decode/encode, the model CSV reader, the elevation-image
//! lookup and the YAML document writer.
pub mod csv_rows;
pub use csv_rows::DeviceRowReader;

pub mod elevation;
pub use elevation::find_elevation_images;

pub mod writers;
