//! Contacts page content.

use docsystem_entity::contact::{ContactChannel, ContactKind, Office, SupportLinks};

use crate::dataset::ContactBook;

const SUPPORT_EMAIL: &str = "support@docsystem.ru";
const TELEGRAM_URL: &str = "https://t.me/docsystem_support";
const MAP_WIDGET_URL: &str = "https://yandex.ru/map-widget/v1/";

const OFFICE_LATITUDE: f64 = 55.753215;
const OFFICE_LONGITUDE: f64 = 37.620393;

const OFFICE_DESCRIPTION: &str =
    "Приходите к нам в офис для личной консультации или демонстрации системы";
const SUPPORT_MESSAGE: &str = concat!(
    "Наша служба поддержки готова помочь вам с любыми вопросами ",
    "по использованию системы, документации и интеграции"
);

fn channel(kind: ContactKind, title: &str, value: &str, action: Option<&str>) -> ContactChannel {
    ContactChannel {
        kind,
        title: title.to_string(),
        value: value.to_string(),
        action: action.map(str::to_string),
    }
}

/// Contact cards, office and support links.
pub fn seed_contacts() -> ContactBook {
    let mailto = format!("mailto:{SUPPORT_EMAIL}");
    let (lat, lon) = (OFFICE_LATITUDE, OFFICE_LONGITUDE);
    let map_embed_url = format!(
        "{MAP_WIDGET_URL}?ll={lon},{lat}&z=15&l=map&pt={lon},{lat},pm2rdm"
    );

    ContactBook {
        channels: vec![
            channel(ContactKind::Email, "Email", SUPPORT_EMAIL, Some(&mailto)),
            channel(
                ContactKind::Phone,
                "Телефон",
                "+7 (495) 123-45-67",
                Some("tel:+74951234567"),
            ),
            channel(
                ContactKind::Telegram,
                "Telegram",
                "@docsystem_support",
                Some(TELEGRAM_URL),
            ),
            channel(
                ContactKind::Hours,
                "Часы работы",
                "Пн-Пт: 9:00 - 18:00",
                None,
            ),
        ],
        office: Office {
            title: "Наш офис".to_string(),
            description: OFFICE_DESCRIPTION.to_string(),
            address: "ул. Пушкина, 15".to_string(),
            route_url: "https://yandex.ru/maps/?text=ул.+Пушкина,+15".to_string(),
            map_embed_url,
            latitude: OFFICE_LATITUDE,
            longitude: OFFICE_LONGITUDE,
        },
        support: SupportLinks {
            message: SUPPORT_MESSAGE.to_string(),
            email_url: mailto,
            telegram_url: TELEGRAM_URL.to_string(),
        },
    }
}
