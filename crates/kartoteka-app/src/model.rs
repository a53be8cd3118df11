// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::OrgId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub building: String,
}

impl Address {
    pub fn display(&self) -> String {
        format!(
            "г. {}, ул. {}, д. {}",
            self.city, self.street, self.building
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrgId,
    pub name: String,
    pub director: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Director,
}

impl SortKey {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Director => "director",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Название",
            Self::Director => "Директор",
        }
    }

    pub fn field<'a>(self, organization: &'a Organization) -> &'a str {
        match self {
            Self::Name => &organization.name,
            Self::Director => &organization.director,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, SortDirection, SortKey};

    #[test]
    fn address_display_uses_russian_postal_style() {
        let address = Address {
            city: "Москва".to_owned(),
            street: "Ленина".to_owned(),
            building: "1".to_owned(),
        };
        assert_eq!(address.display(), "г. Москва, ул. Ленина, д. 1");
    }

    #[test]
    fn sort_direction_flip_is_involutive() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.flipped().flipped(), SortDirection::Asc);
    }

    #[test]
    fn sort_key_labels_match_column_headers() {
        assert_eq!(SortKey::Name.label(), "Название");
        assert_eq!(SortKey::Director.label(), "Директор");
    }
}
