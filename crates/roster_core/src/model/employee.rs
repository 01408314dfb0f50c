//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record tied to a nucleus (work unit).
//! - Define the raw form input shared by the registration and edit flows.
//!
//! # Invariants
//! - `id` is assigned by the store on creation and never changes afterwards.
//! - Nucleus fields are denormalized copies, not references to another entity.
//! - `value` stays a display string (`R$ 3.200,00`); it is never stored as a number.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, store-assigned employee identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = String;

/// Suggested job titles offered by the registration form.
///
/// `role` stays free text; these values are hints, not a closed set.
pub const KNOWN_ROLES: [&str; 4] = ["Técnico", "Auxiliar Técnico", "Coordenador", "Professor"];

/// Declared gender of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculino,
    Feminino,
    Outros,
}

impl Gender {
    /// Parses the exact lowercase literal used by forms and exports.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "masculino" => Some(Self::Masculino),
            "feminino" => Some(Self::Feminino),
            "outros" => Some(Self::Outros),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masculino => "masculino",
            Self::Feminino => "feminino",
            Self::Outros => "outros",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical employee record accepted into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub nucleus_number: u32,
    pub city: String,
    pub nucleus_name: String,
    pub location: String,
    pub nucleus_address: String,
    pub nucleus_neighborhood: String,
    /// Name of the person responsible for the nucleus.
    pub leadership: String,
    pub leadership_phone: String,
    pub name: String,
    pub phone: String,
    /// Activity or program offered at the nucleus (e.g. a sport).
    pub modality: String,
    pub role: String,
    pub cref: String,
    /// Display-formatted monthly amount, e.g. `R$ 3.200,00`.
    pub value: String,
    pub cnpj: String,
    pub pix: String,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub address: String,
    pub neighborhood: String,
    pub gender: Gender,
}

/// Validated employee data that has not been assigned an id yet.
///
/// Only produced by [`crate::model::validation::validate_new`], so holding one
/// proves every required field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub(crate) record: EmployeeRecord,
}

impl NewEmployee {
    /// Binds the store-assigned id and yields the final record.
    pub(crate) fn into_record(self, id: EmployeeId) -> EmployeeRecord {
        EmployeeRecord { id, ..self.record }
    }

    /// Read-only view of the validated fields (the `id` is still empty).
    pub fn fields(&self) -> &EmployeeRecord {
        &self.record
    }
}

/// Raw form state as typed by the user.
///
/// Every field is text, including `nucleus_number` and `gender`, so a form can
/// hold partially filled or invalid values until validation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    /// Required by the edit flow, ignored by the registration flow.
    pub id: Option<EmployeeId>,
    pub nucleus_number: String,
    pub city: String,
    pub nucleus_name: String,
    pub location: String,
    pub nucleus_address: String,
    pub nucleus_neighborhood: String,
    pub leadership: String,
    pub leadership_phone: String,
    pub name: String,
    pub phone: String,
    pub modality: String,
    pub role: String,
    pub cref: String,
    pub value: String,
    pub cnpj: String,
    pub pix: String,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub address: String,
    pub neighborhood: String,
    pub gender: String,
}

impl From<&EmployeeRecord> for EmployeeInput {
    /// Pre-fills the edit form from a stored record.
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            nucleus_number: record.nucleus_number.to_string(),
            city: record.city.clone(),
            nucleus_name: record.nucleus_name.clone(),
            location: record.location.clone(),
            nucleus_address: record.nucleus_address.clone(),
            nucleus_neighborhood: record.nucleus_neighborhood.clone(),
            leadership: record.leadership.clone(),
            leadership_phone: record.leadership_phone.clone(),
            name: record.name.clone(),
            phone: record.phone.clone(),
            modality: record.modality.clone(),
            role: record.role.clone(),
            cref: record.cref.clone(),
            value: record.value.clone(),
            cnpj: record.cnpj.clone(),
            pix: record.pix.clone(),
            bank: record.bank.clone(),
            agency: record.agency.clone(),
            account: record.account.clone(),
            address: record.address.clone(),
            neighborhood: record.neighborhood.clone(),
            gender: record.gender.as_str().to_string(),
        }
    }
}

/// Returns known roles starting with `prefix`, ignoring case.
///
/// A blank prefix returns the full suggestion list.
pub fn role_suggestions(prefix: &str) -> Vec<&'static str> {
    let needle = prefix.trim().to_lowercase();
    KNOWN_ROLES
        .iter()
        .copied()
        .filter(|role| role.to_lowercase().starts_with(needle.as_str()))
        .collect()
}

/// Demonstration roster used to seed a fresh session.
pub fn sample_employees() -> Vec<EmployeeInput> {
    vec![
        sample(
            [
                "301",
                "RIO DAS FORES",
                "Núcleo A - Futebol",
                "Campo Municipal",
                "Rua Principal, 100",
                "Centro",
                "DU VEREADOR",
                "24981078838",
                "Leandro Horacio",
                "21980979040",
                "Futebol",
                "Técnico",
                "123654",
                "R$ 3.200,00",
                "12.255.600/0001-00",
                "5241287744",
                "314",
                "2096",
                "1431112",
                "Rua Professor Luiz",
                "Anchieta",
            ],
            Gender::Masculino,
        ),
        sample(
            [
                "302",
                "RIO DAS FORES",
                "Núcleo B - Vôlei",
                "Ginásio Poliesportivo",
                "Av. Secundária, 50",
                "Bairro Novo",
                "SONERA",
                "24992640979",
                "Maria Silva",
                "21987654321",
                "Vôlei",
                "Auxiliar Técnico",
                "987654",
                "R$ 1.500,00",
                "12.255.600/0002-00",
                "11122233344",
                "001",
                "1000",
                "5556667",
                "Rua das Flores, 10",
                "Jardim",
            ],
            Gender::Feminino,
        ),
        sample(
            [
                "303",
                "VALENÇA",
                "Núcleo C - Natação",
                "Clube Aquático",
                "Praça Central",
                "Centro",
                "MARQUINHO DA SAUDE",
                "24992974137",
                "João Pereira",
                "24999887766",
                "Natação",
                "Coordenador",
                "112233",
                "R$ 4.000,00",
                "12.255.600/0003-00",
                "99988877766",
                "237",
                "3000",
                "1234567",
                "Rua A, 5",
                "Saúde",
            ],
            Gender::Masculino,
        ),
        sample(
            [
                "306",
                "VOLTA REDONDA",
                "Núcleo D - Basquete",
                "Quadra Municipal",
                "Rua 1, 45",
                "Vila",
                "MARCAO",
                "24999112233",
                "Ana Costa",
                "24999112233",
                "Basquete",
                "Professor",
                "445566",
                "R$ 2.800,00",
                "12.255.600/0004-00",
                "44455566677",
                "104",
                "4000",
                "8889990",
                "Av. Brasil, 200",
                "Industrial",
            ],
            Gender::Feminino,
        ),
    ]
}

fn sample(fields: [&str; 21], gender: Gender) -> EmployeeInput {
    let [nucleus_number, city, nucleus_name, location, nucleus_address, nucleus_neighborhood, leadership, leadership_phone, name, phone, modality, role, cref, value, cnpj, pix, bank, agency, account, address, neighborhood] =
        fields.map(str::to_string);
    EmployeeInput {
        id: None,
        nucleus_number,
        city,
        nucleus_name,
        location,
        nucleus_address,
        nucleus_neighborhood,
        leadership,
        leadership_phone,
        name,
        phone,
        modality,
        role,
        cref,
        value,
        cnpj,
        pix,
        bank,
        agency,
        account,
        address,
        neighborhood,
        gender: gender.as_str().to_string(),
    }
}
