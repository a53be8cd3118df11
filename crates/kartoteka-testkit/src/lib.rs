// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use kartoteka_app::{Address, OrgId, Organization};

const LEGAL_FORMS: [&str; 4] = ["ООО", "АО", "ЗАО", "ПАО"];

const COMPANY_STEMS: [&str; 12] = [
    "Горизонт",
    "Прогресс",
    "Квант",
    "Сапфир",
    "Меридиан",
    "Титан",
    "Гранит",
    "Эталон",
    "Салют",
    "Родник",
    "Маяк",
    "Искра",
];

const SURNAMES: [&str; 16] = [
    "Фёдоров",
    "Николаев",
    "Андреев",
    "Павлов",
    "Богданов",
    "Тарасов",
    "Белов",
    "Комаров",
    "Киселёв",
    "Макаров",
    "Зайцев",
    "Соколов",
    "Лебедев",
    "Козлов",
    "Новиков",
    "Волков",
];

const INITIALS: [&str; 12] = [
    "А", "Б", "В", "Г", "Д", "Е", "И", "К", "М", "Н", "П", "С",
];

const CITIES: [&str; 12] = [
    "Омск",
    "Томск",
    "Пермь",
    "Уфа",
    "Воронеж",
    "Саратов",
    "Тула",
    "Рязань",
    "Курск",
    "Белгород",
    "Иркутск",
    "Владимир",
];

const STREETS: [&str; 12] = [
    "Центральная",
    "Школьная",
    "Садовая",
    "Лесная",
    "Набережная",
    "Заводская",
    "Полевая",
    "Октябрьская",
    "Гагарина",
    "Пушкина",
    "Чехова",
    "Кирова",
];

pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        let mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            state: if mixed == 0 { 0xA409_3822_299F_31D0 } else { mixed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    pub fn int_n(&mut self, n: u64) -> u64 {
        if n == 0 { 0 } else { self.next_u64() % n }
    }

    pub fn bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

pub struct OrgFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl OrgFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn int_n(&mut self, n: u64) -> u64 {
        self.rng.int_n(n)
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len() as u64) as usize]
    }

    fn int_range_i32(&mut self, low: i32, high: i32) -> i32 {
        let span = (high - low + 1) as u64;
        low + self.rng.int_n(span) as i32
    }

    pub fn person(&mut self) -> String {
        let surname = self.pick(&SURNAMES);
        let first = self.pick(&INITIALS);
        let patronymic = self.pick(&INITIALS);
        format!("{surname} {first}.{patronymic}.")
    }

    pub fn company_name(&mut self) -> String {
        if self.rng.bool() {
            let form = self.pick(&LEGAL_FORMS);
            let stem = self.pick(&COMPANY_STEMS);
            format!("{form} «{stem}»")
        } else {
            format!("ИП {}", self.person())
        }
    }

    pub fn phone(&mut self) -> String {
        let code = self.int_range_i32(0, 99);
        let block = self.int_range_i32(0, 999);
        let tail_a = self.int_range_i32(0, 99);
        let tail_b = self.int_range_i32(0, 99);
        format!("+7 9{code:02} {block:03} {tail_a:02} {tail_b:02}")
    }

    pub fn address(&mut self) -> Address {
        Address {
            city: self.pick(&CITIES).to_string(),
            street: self.pick(&STREETS).to_string(),
            building: self.int_range_i32(1, 120).to_string(),
        }
    }

    pub fn organization(&mut self) -> Organization {
        let name = self.company_name();
        let director = if let Some(person) = name.strip_prefix("ИП ") {
            person.to_string()
        } else {
            self.person()
        };
        Organization {
            id: OrgId::generate(),
            name,
            director,
            phone: self.phone(),
            address: self.address(),
        }
    }

    pub fn organizations(&mut self, count: usize) -> Vec<Organization> {
        (0..count).map(|_| self.organization()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_repeats_values() {
        let mut a = OrgFaker::new(42);
        let mut b = OrgFaker::new(42);
        for _ in 0..50 {
            assert_eq!(a.company_name(), b.company_name());
            assert_eq!(a.phone(), b.phone());
        }
    }

    #[test]
    fn same_seed_repeats_organizations() {
        let mut a = OrgFaker::new(7);
        let mut b = OrgFaker::new(7);
        for _ in 0..20 {
            let left = a.organization();
            let right = b.organization();
            assert_eq!(left.name, right.name);
            assert_eq!(left.director, right.director);
            assert_eq!(left.phone, right.phone);
            assert_eq!(left.address, right.address);
        }
    }

    #[test]
    fn zero_seed_is_normalized() {
        let mut zero = OrgFaker::new(0);
        let mut one = OrgFaker::new(1);
        assert_eq!(zero.seed(), 1);
        assert_eq!(zero.company_name(), one.company_name());
    }

    #[test]
    fn variety_across_seeds() {
        let mut names = BTreeSet::new();
        for seed in 0..20 {
            let mut faker = OrgFaker::new(seed);
            names.insert(faker.organization().name);
        }
        assert!(names.len() >= 10, "expected variety, got {names:?}");
    }

    #[test]
    fn int_n_stays_in_bounds() {
        let mut rng = DeterministicRng::new(99);
        for _ in 0..100 {
            assert!(rng.int_n(7) < 7);
        }
        assert_eq!(rng.int_n(0), 0);
    }

    #[test]
    fn organization_fields_are_filled() {
        let mut faker = OrgFaker::new(3);
        for _ in 0..30 {
            let org = faker.organization();
            assert!(!org.name.is_empty());
            assert!(!org.director.is_empty());
            assert!(org.phone.starts_with("+7 9"));
            assert!(!org.address.city.is_empty());
            assert!(!org.address.street.is_empty());
            assert!(!org.address.building.is_empty());
        }
    }

    #[test]
    fn sole_proprietor_director_matches_name() {
        let mut faker = OrgFaker::new(11);
        let mut checked = 0;
        for _ in 0..100 {
            let org = faker.organization();
            if let Some(person) = org.name.strip_prefix("ИП ") {
                assert_eq!(org.director, person);
                checked += 1;
            }
        }
        assert!(checked > 0, "no sole proprietors in 100 draws");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut faker = OrgFaker::new(5);
        let orgs = faker.organizations(25);
        let ids: BTreeSet<_> = orgs.iter().map(|org| org.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn person_has_initials() {
        let mut faker = OrgFaker::new(13);
        for _ in 0..20 {
            let person = faker.person();
            assert!(person.ends_with('.'), "person without initials: {person}");
            assert_eq!(person.matches('.').count(), 2);
        }
    }
}
