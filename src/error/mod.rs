mod asset_error;
mod business_error;
mod contact_error;
mod dispatch_error;

pub use asset_error::AssetError;
pub use business_error::BizErrorEnum;
pub use contact_error::ContactError;
pub use dispatch_error::DispatchError;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
