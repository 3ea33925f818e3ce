pub mod case;
pub mod indictment;
pub mod license;
pub mod staff_document;
