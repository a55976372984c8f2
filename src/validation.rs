use crate::error::{Error, Result};

fn validate_required(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub fn validate_department_name(name: &str) -> Result<()> {
    validate_required(name, "Department name")
}

pub fn validate_role_title(title: &str) -> Result<()> {
    validate_required(title, "Role title")
}

pub fn validate_first_name(name: &str) -> Result<()> {
    validate_required(name, "First name")
}

pub fn validate_last_name(name: &str) -> Result<()> {
    validate_required(name, "Last name")
}

pub fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() || salary <= 0.0 {
        return Err(Error::Validation(
            "Salary must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Remove thousands separators from `number`. Commas are only accepted
/// between well-formed groups of the whole part: `1,234,567` but not `1,2,3`.
fn strip_thousands_separators(number: &str) -> Option<String> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };

    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    if whole.contains(',') {
        let mut groups = whole.split(',');
        let leading = groups.next().unwrap_or_default();
        if leading.is_empty() || leading.len() > 3 || groups.any(|g| g.len() != 3) {
            return None;
        }
    }

    let mut cleaned = whole.replace(',', "");
    if let Some(fraction) = fraction {
        cleaned.push('.');
        cleaned.push_str(fraction);
    }
    Some(cleaned)
}

/// Parse a salary as typed by a user: `90000`, `90,000`, or `$90,000.50`.
pub fn parse_salary(input: &str) -> Result<f64> {
    let input = input.trim();
    let not_a_number = || Error::Validation(format!("'{input}' is not a number"));

    let number = input.strip_prefix('$').unwrap_or(input);
    let salary: f64 = strip_thousands_separators(number)
        .ok_or_else(not_a_number)?
        .parse()
        .map_err(|_| not_a_number())?;

    validate_salary(salary)?;
    Ok(salary)
}
