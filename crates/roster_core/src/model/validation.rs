//! Field-level validation shared by the registration and edit flows.
//!
//! # Responsibility
//! - Turn raw [`EmployeeInput`] form state into typed records.
//! - Report every failing field at once so a form can render all messages.
//!
//! # Invariants
//! - One rule set backs both flows; they differ only in id handling.
//! - No partial record is ever produced on failure.
//! - Required checks treat whitespace-only text as empty.
//! - Length rules and the gender literal apply to the text as entered.
//! - Lengths count characters, not bytes.

use crate::model::employee::{EmployeeInput, EmployeeRecord, Gender, NewEmployee};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAME_MIN_CHARS: usize = 2;
const PHONE_MIN_CHARS: usize = 8;

/// Field key to message mapping for every failed rule.
///
/// Keys use the camelCase wire names (`nucleusNumber`, `gender`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the message recorded for `field`, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Failed field keys in stable (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(key, msg)| (*key, msg.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid employee fields:")?;
        for (field, message) in &self.fields {
            write!(f, " {field}={message};")?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Validates registration input. Any `id` on the input is ignored.
///
/// # Errors
/// Returns every failing field when at least one rule is violated.
pub fn validate_new(input: &EmployeeInput) -> Result<NewEmployee, ValidationErrors> {
    let record = check_fields(input, String::new(), ValidationErrors::default())?;
    Ok(NewEmployee { record })
}

/// Validates edit input for an already stored record.
///
/// Same rules as [`validate_new`], plus a non-empty `id`. The id is preserved
/// verbatim; whether it exists is the store's concern.
///
/// # Errors
/// Returns every failing field, including `id` when it is missing.
pub fn validate_existing(input: &EmployeeInput) -> Result<EmployeeRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let id = match input.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            errors.insert("id", "Identificador é obrigatório para edição");
            String::new()
        }
    };
    check_fields(input, id, errors)
}

fn check_fields(
    input: &EmployeeInput,
    id: String,
    mut errors: ValidationErrors,
) -> Result<EmployeeRecord, ValidationErrors> {
    let nucleus_number = parse_nucleus_number(&input.nucleus_number, &mut errors);

    require(&mut errors, "city", &input.city, "Cidade é obrigatória");
    require(
        &mut errors,
        "leadership",
        &input.leadership,
        "Liderança é obrigatória",
    );
    min_chars(
        &mut errors,
        "name",
        &input.name,
        NAME_MIN_CHARS,
        "Nome Completo é obrigatório",
        "Nome Completo deve ter ao menos 2 caracteres",
    );
    min_chars(
        &mut errors,
        "phone",
        &input.phone,
        PHONE_MIN_CHARS,
        "Telefone é obrigatório",
        "Telefone deve ter ao menos 8 caracteres",
    );
    require(
        &mut errors,
        "modality",
        &input.modality,
        "Modalidade é obrigatória",
    );
    require(&mut errors, "role", &input.role, "Função é obrigatória");

    let gender = parse_gender(&input.gender, &mut errors);

    match (nucleus_number, gender) {
        (Some(nucleus_number), Some(gender)) if errors.is_empty() => Ok(EmployeeRecord {
            id,
            nucleus_number,
            city: input.city.clone(),
            nucleus_name: input.nucleus_name.clone(),
            location: input.location.clone(),
            nucleus_address: input.nucleus_address.clone(),
            nucleus_neighborhood: input.nucleus_neighborhood.clone(),
            leadership: input.leadership.clone(),
            leadership_phone: input.leadership_phone.clone(),
            name: input.name.clone(),
            phone: input.phone.clone(),
            modality: input.modality.clone(),
            role: input.role.clone(),
            cref: input.cref.clone(),
            value: input.value.clone(),
            cnpj: input.cnpj.clone(),
            pix: input.pix.clone(),
            bank: input.bank.clone(),
            agency: input.agency.clone(),
            account: input.account.clone(),
            address: input.address.clone(),
            neighborhood: input.neighborhood.clone(),
            gender,
        }),
        _ => Err(errors),
    }
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn min_chars(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    missing_message: &str,
    short_message: &str,
) {
    if value.trim().is_empty() {
        errors.insert(field, missing_message);
    } else if value.chars().count() < min {
        errors.insert(field, short_message);
    }
}

fn parse_nucleus_number(value: &str, errors: &mut ValidationErrors) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert("nucleusNumber", "Nº Núcleo é obrigatório");
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.insert("nucleusNumber", "Nº Núcleo deve ser numérico");
            None
        }
    }
}

fn parse_gender(value: &str, errors: &mut ValidationErrors) -> Option<Gender> {
    if value.trim().is_empty() {
        errors.insert("gender", "Sexo é obrigatório");
        return None;
    }
    let gender = Gender::parse(value);
    if gender.is_none() {
        errors.insert("gender", "Sexo deve ser masculino, feminino ou outros");
    }
    gender
}
