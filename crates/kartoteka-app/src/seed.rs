// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::OrgId;
use crate::model::{Address, Organization};

const SEED_ROWS: [(&str, &str, &str, &str, &str, &str); 12] = [
    (
        "ООО «Вектор»",
        "Иванов И.И.",
        "+7 000 123 45 67",
        "Москва",
        "Ленина",
        "1",
    ),
    (
        "ИП Сидоров С.С.",
        "Сидоров С.С.",
        "+7 000 56 78 99",
        "Санкт-Петербург",
        "Невский проспект",
        "2",
    ),
    (
        "ООО «ТехноСервис»",
        "Петров П.П.",
        "+7 900 111 22 33",
        "Казань",
        "Баумана",
        "5",
    ),
    (
        "АО «Альфа»",
        "Смирнов А.А.",
        "+7 900 444 55 66",
        "Екатеринбург",
        "Мира",
        "10",
    ),
    (
        "ООО «Ромашка»",
        "Кузнецова И.В.",
        "+7 901 777 88 99",
        "Новосибирск",
        "Красный проспект",
        "12",
    ),
    (
        "ООО «СтройИнвест»",
        "Васильев Д.Д.",
        "+7 905 321 00 11",
        "Самара",
        "Молодогвардейская",
        "8",
    ),
    (
        "ИП Ковалёв Н.Н.",
        "Ковалёв Н.Н.",
        "+7 905 555 66 77",
        "Ростов-на-Дону",
        "Большая Садовая",
        "3",
    ),
    (
        "ООО «Север»",
        "Морозов Е.Е.",
        "+7 999 000 11 22",
        "Архангельск",
        "Троицкий",
        "7",
    ),
    (
        "ООО «ЮгСнаб»",
        "Сафронов С.С.",
        "+7 988 420 42 42",
        "Краснодар",
        "Красная",
        "15",
    ),
    (
        "ЗАО «Волга-Лес»",
        "Орлов Г.Г.",
        "+7 987 765 43 21",
        "Нижний Новгород",
        "Покровская",
        "9",
    ),
    (
        "ООО «Балтика»",
        "Никифоров Р.Р.",
        "+7 981 123 45 67",
        "Калининград",
        "Ленинский проспект",
        "21",
    ),
    (
        "ИП Медведев М.М.",
        "Медведев М.М.",
        "+7 985 234 56 78",
        "Тверь",
        "Советская",
        "4",
    ),
];

pub fn seed_organizations() -> Vec<Organization> {
    SEED_ROWS
        .iter()
        .map(|&(name, director, phone, city, street, building)| Organization {
            id: OrgId::generate(),
            name: name.to_owned(),
            director: director.to_owned(),
            phone: phone.to_owned(),
            address: Address {
                city: city.to_owned(),
                street: street.to_owned(),
                building: building.to_owned(),
            },
        })
        .collect()
}
