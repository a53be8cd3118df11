// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::ids::OrgId;
use crate::model::{Address, Organization};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Director,
    Phone,
    City,
    Street,
    Building,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Director,
        Self::Phone,
        Self::City,
        Self::Street,
        Self::Building,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Director => "director",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Street => "street",
            Self::Building => "building",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Название",
            Self::Director => "Директор",
            Self::Phone => "Телефон",
            Self::City => "Город",
            Self::Street => "Улица",
            Self::Building => "Дом",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizationForm {
    pub name: String,
    pub director: String,
    pub phone: String,
    pub city: String,
    pub street: String,
    pub building: String,
}

impl OrganizationForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_organization(organization: &Organization) -> Self {
        Self {
            name: organization.name.clone(),
            director: organization.director.clone(),
            phone: organization.phone.clone(),
            city: organization.address.city.clone(),
            street: organization.address.street.clone(),
            building: organization.address.building.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Director => &self.director,
            FormField::Phone => &self.phone,
            FormField::City => &self.city,
            FormField::Street => &self.street,
            FormField::Building => &self.building,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Director => &mut self.director,
            FormField::Phone => &mut self.phone,
            FormField::City => &mut self.city,
            FormField::Street => &mut self.street,
            FormField::Building => &mut self.building,
        }
    }

    // Presence is checked without trimming: a whitespace-only value counts
    // as filled here and is stored trimmed to the empty string on submit.
    pub fn is_complete(&self) -> bool {
        FormField::ALL.iter().all(|field| !self.field(*field).is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        for field in FormField::ALL {
            if self.field(field).is_empty() {
                bail!("{} is required -- fill it in and retry", field.name());
            }
        }
        Ok(())
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            director: self.director.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            city: self.city.trim().to_owned(),
            street: self.street.trim().to_owned(),
            building: self.building.trim().to_owned(),
        }
    }

    pub fn into_organization(self, id: OrgId) -> Organization {
        Organization {
            id,
            name: self.name,
            director: self.director,
            phone: self.phone,
            address: Address {
                city: self.city,
                street: self.street,
                building: self.building,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, OrganizationForm};
    use crate::ids::OrgId;
    use crate::model::{Address, Organization};

    fn filled_form() -> OrganizationForm {
        OrganizationForm {
            name: "ООО «Вектор»".to_owned(),
            director: "Иванов И.И.".to_owned(),
            phone: "+7 000 123 45 67".to_owned(),
            city: "Москва".to_owned(),
            street: "Ленина".to_owned(),
            building: "1".to_owned(),
        }
    }

    #[test]
    fn blank_form_is_incomplete() {
        let form = OrganizationForm::blank();
        assert!(!form.is_complete());
        assert!(form.validate().is_err());
    }

    #[test]
    fn filled_form_is_complete() {
        let form = filled_form();
        assert!(form.is_complete());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn each_missing_field_fails_validation() {
        for field in FormField::ALL {
            let mut form = filled_form();
            form.field_mut(field).clear();
            assert!(!form.is_complete(), "field {}", field.name());
            let error = form.validate().expect_err("missing field must reject");
            assert!(
                error.to_string().contains(field.name()),
                "error names missing field {}: {error}",
                field.name(),
            );
        }
    }

    #[test]
    fn whitespace_only_field_counts_as_present() {
        let mut form = filled_form();
        form.director = "   ".to_owned();
        assert!(form.is_complete());
        assert!(form.validate().is_ok());
        assert_eq!(form.trimmed().director, "");
    }

    #[test]
    fn from_organization_copies_every_field() {
        let organization = Organization {
            id: OrgId::generate(),
            name: "АО «Альфа»".to_owned(),
            director: "Смирнов А.А.".to_owned(),
            phone: "+7 900 444 55 66".to_owned(),
            address: Address {
                city: "Екатеринбург".to_owned(),
                street: "Мира".to_owned(),
                building: "10".to_owned(),
            },
        };

        let form = OrganizationForm::from_organization(&organization);
        assert_eq!(form.name, organization.name);
        assert_eq!(form.director, organization.director);
        assert_eq!(form.phone, organization.phone);
        assert_eq!(form.city, organization.address.city);
        assert_eq!(form.street, organization.address.street);
        assert_eq!(form.building, organization.address.building);
    }

    #[test]
    fn trimmed_form_round_trips_into_organization() {
        let mut form = filled_form();
        form.name = "  ООО «Вектор»  ".to_owned();
        form.phone = "\t+7 000 123 45 67 ".to_owned();

        let id = OrgId::generate();
        let organization = form.trimmed().into_organization(id);
        assert_eq!(organization.id, id);
        assert_eq!(organization.name, "ООО «Вектор»");
        assert_eq!(organization.phone, "+7 000 123 45 67");
        assert_eq!(organization.address.city, "Москва");
    }
}
