use chrono::Utc;
use tracing::info;

use crate::error::{LaunchError, Result};
use crate::pipeline::aggregate::ClassAggregates;
use crate::pipeline::class::LaunchClass;
use crate::pipeline::types::{LaunchReport, ResultRow};
use crate::pipeline::utility::title_case;

/// Picks the cheapest country of one class from its sorted aggregate table.
///
/// # Errors
///
/// Returns [`LaunchError::NoEligibleCountry`] when the table is empty.
pub fn winner(aggregates: &ClassAggregates, class: LaunchClass) -> Result<ResultRow> {
    let best = aggregates
        .for_class(class)
        .first()
        .ok_or(LaunchError::NoEligibleCountry(class))?;

    info!(
        class = %class,
        country = %best.country,
        average_price = best.average_price,
        "Selected cheapest country"
    );

    Ok(ResultRow {
        launch_class: class,
        average_price: best.average_price,
        country: title_case(&best.country),
    })
}

/// Assembles the three-row report, one winner per class in reporting order.
pub fn select_winners(aggregates: &ClassAggregates) -> Result<LaunchReport> {
    let [light, medium, heavy] = LaunchClass::ALL.map(|class| winner(aggregates, class));

    Ok(LaunchReport {
        generated_at: Utc::now(),
        rows: [light?, medium?, heavy?],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::CountryAggregate;

    fn aggregate(class: LaunchClass, country: &str, price: f64) -> CountryAggregate {
        CountryAggregate {
            launch_class: class,
            country: country.to_string(),
            average_price: price,
            launches: 1,
        }
    }

    fn full_aggregates() -> ClassAggregates {
        ClassAggregates {
            light: vec![
                aggregate(LaunchClass::Light, "new zealand", 80.0),
                aggregate(LaunchClass::Light, "usa", 90.0),
            ],
            medium: vec![aggregate(LaunchClass::Medium, "india", 40.0)],
            heavy: vec![aggregate(LaunchClass::Heavy, "usa", 12.5)],
        }
    }

    #[test]
    fn test_select_first_row_per_class() {
        let report = select_winners(&full_aggregates()).unwrap();

        assert_eq!(report.rows[0].launch_class, LaunchClass::Light);
        assert_eq!(report.rows[0].country, "New Zealand");
        assert_eq!(report.rows[0].average_price, 80.0);
        assert_eq!(report.rows[1].country, "India");
        assert_eq!(report.rows[2].launch_class, LaunchClass::Heavy);
        assert_eq!(report.rows[2].country, "Usa");
    }

    #[test]
    fn test_empty_class_is_an_error() {
        let mut aggregates = full_aggregates();
        aggregates.medium.clear();

        let err = select_winners(&aggregates).unwrap_err();
        assert!(matches!(err, LaunchError::NoEligibleCountry(LaunchClass::Medium)));
        assert_eq!(
            err.to_string(),
            "no eligible country for the Medium launch class"
        );
    }
}
