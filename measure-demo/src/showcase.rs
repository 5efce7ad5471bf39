//! Fixed scenarios exercising every category through the typed API

use tracing::debug;
use measure_core::{Measurable, MeasureError, Quantity};
use measure_units::{
    Length, LengthUnit, Temperature, TemperatureUnit, Volume, VolumeUnit, Weight, WeightUnit,
};
use crate::outcome::{Answer, Outcome};

pub fn demonstrate_equality<U: Measurable>(first: &Quantity<U>, second: &Quantity<U>) -> bool {
    first == second
}

pub fn demonstrate_conversion<U: Measurable>(
    quantity: &Quantity<U>,
    target: U,
) -> Result<Quantity<U>, MeasureError> {
    quantity.convert_to(target)
}

/// Add in `target`, or in the first operand's unit when no target is given
pub fn demonstrate_addition<U: Measurable>(
    first: &Quantity<U>,
    second: &Quantity<U>,
    target: Option<U>,
) -> Result<Quantity<U>, MeasureError> {
    match target {
        Some(target) => first.add_in(second, target),
        None => first.add(second),
    }
}

pub fn demonstrate_subtraction<U: Measurable>(
    first: &Quantity<U>,
    second: &Quantity<U>,
    target: Option<U>,
) -> Result<Quantity<U>, MeasureError> {
    match target {
        Some(target) => first.subtract_in(second, target),
        None => first.subtract(second),
    }
}

pub fn demonstrate_division<U: Measurable>(
    first: &Quantity<U>,
    second: &Quantity<U>,
) -> Result<f64, MeasureError> {
    first.divide(second)
}

fn equality<U: Measurable>(a: &Quantity<U>, b: &Quantity<U>) -> Outcome {
    Outcome::new(format!("{} == {}", a, b), Ok(Answer::Bool(demonstrate_equality(a, b))))
}

fn conversion<U: Measurable>(q: &Quantity<U>, target: U) -> Outcome {
    let result = demonstrate_conversion(q, target).map(|r| Answer::quantity(&r));
    Outcome::new(format!("{} -> {}", q, target.name()), result)
}

fn addition<U: Measurable>(a: &Quantity<U>, b: &Quantity<U>, target: Option<U>) -> Outcome {
    let label = match target {
        Some(t) => format!("{} + {} in {}", a, b, t.name()),
        None => format!("{} + {}", a, b),
    };
    Outcome::new(label, demonstrate_addition(a, b, target).map(|r| Answer::quantity(&r)))
}

fn subtraction<U: Measurable>(a: &Quantity<U>, b: &Quantity<U>, target: Option<U>) -> Outcome {
    let label = match target {
        Some(t) => format!("{} - {} in {}", a, b, t.name()),
        None => format!("{} - {}", a, b),
    };
    Outcome::new(label, demonstrate_subtraction(a, b, target).map(|r| Answer::quantity(&r)))
}

fn division<U: Measurable>(a: &Quantity<U>, b: &Quantity<U>) -> Outcome {
    Outcome::new(format!("{} / {}", a, b), demonstrate_division(a, b).map(Answer::Ratio))
}

/// Build and run the fixed scenario list
///
/// Some scenarios fail on purpose (temperature arithmetic, division by
/// zero); their outcomes carry the error.
pub fn run_showcase() -> Result<Vec<Outcome>, MeasureError> {
    let one_foot = Length::new(1.0, LengthUnit::Feet)?;
    let twelve_inches = Length::new(12.0, LengthUnit::Inches)?;
    let one_yard = Length::new(1.0, LengthUnit::Yards)?;
    let five_feet = Length::new(5.0, LengthUnit::Feet)?;
    let zero_feet = Length::new(0.0, LengthUnit::Feet)?;

    let ten_kg = Weight::new(10.0, WeightUnit::Kilogram)?;
    let five_thousand_g = Weight::new(5000.0, WeightUnit::Gram)?;
    let one_kg = Weight::new(1.0, WeightUnit::Kilogram)?;

    let one_liter = Volume::new(1.0, VolumeUnit::Liter)?;
    let one_gallon = Volume::new(1.0, VolumeUnit::Gallon)?;
    let thousand_ml = Volume::new(1000.0, VolumeUnit::Milliliter)?;

    let boiling_f = Temperature::new(212.0, TemperatureUnit::Fahrenheit)?;
    let one_c = Temperature::new(1.0, TemperatureUnit::Celsius)?;
    let freezing_c = Temperature::new(0.0, TemperatureUnit::Celsius)?;
    let freezing_f = Temperature::new(32.0, TemperatureUnit::Fahrenheit)?;

    let outcomes = vec![
        equality(&one_foot, &twelve_inches),
        addition(&one_foot, &twelve_inches, None),
        addition(&twelve_inches, &one_foot, None),
        addition(&one_foot, &twelve_inches, Some(LengthUnit::Yards)),
        conversion(&one_yard, LengthUnit::Inches),
        division(&one_yard, &one_foot),
        division(&five_feet, &zero_feet),
        equality(&one_kg, &Weight::new(1000.0, WeightUnit::Gram)?),
        subtraction(&ten_kg, &five_thousand_g, Some(WeightUnit::Gram)),
        conversion(&one_kg, WeightUnit::Pound),
        equality(&one_liter, &thousand_ml),
        conversion(&one_gallon, VolumeUnit::Liter),
        addition(&one_liter, &thousand_ml, Some(VolumeUnit::Milliliter)),
        conversion(&boiling_f, TemperatureUnit::Celsius),
        equality(&freezing_c, &freezing_f),
        addition(&one_c, &one_c, None),
        subtraction(&one_c, &one_c, None),
        division(&one_c, &one_c),
    ];

    for outcome in &outcomes {
        debug!(operation = %outcome.operation, ok = outcome.is_ok(), "scenario");
    }

    Ok(outcomes)
}
