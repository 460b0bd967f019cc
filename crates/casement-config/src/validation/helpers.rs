use std::fmt::Display;

/// Record `name` as out of range unless `min <= value <= max`.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display,
{
    let in_range = value >= min && value <= max;
    if !in_range {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
