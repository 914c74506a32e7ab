mod contact_data;

pub use contact_data::ContactData;
