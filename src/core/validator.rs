use crate::domain::model::{DimensionField, PackageType, ShippingOptions};
use crate::utils::error::{RatesError, Result};

/// 檢查包裹尺寸是否符合最小值。平價箱 (flat rate) 尺寸固定，不做檢查；
/// SoftEnvelope 不檢查高度。遇到第一個違規即回傳。
pub fn validate_dimensions(options: &ShippingOptions) -> Result<()> {
    for &package_type in &options.package_type_keys {
        if package_type.is_flat_rate() {
            continue;
        }

        for field in [DimensionField::X, DimensionField::Y, DimensionField::Z] {
            if field == DimensionField::Z && package_type == PackageType::SoftEnvelope {
                continue;
            }
            check_minimum(package_type, field, options.dimension(field))?;
        }
    }

    Ok(())
}

fn check_minimum(package_type: PackageType, field: DimensionField, value: Option<f64>) -> Result<()> {
    let minimum = field.minimum();
    match value {
        Some(actual) if actual < minimum => {
            tracing::debug!(
                "Rejecting {} {}: {} < {}",
                package_type,
                field.as_str(),
                actual,
                minimum
            );
            Err(RatesError::Validation {
                package_type,
                field,
                minimum,
                actual,
            })
        }
        _ => Ok(()),
    }
}
