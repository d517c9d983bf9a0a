pub mod aggregate;

pub use aggregate::{
    fields, AadharCard, Driver, DriverAddress, DriverDocuments, DriverStatusUpdate, DrivingLicense,
    PanCard, Vehicle, DRIVER_STATUSES, VEHICLE_TYPES,
};
