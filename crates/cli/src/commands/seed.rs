//! Seed the data file with a sample order book.
//!
//! # Usage
//!
//! ```bash
//! # Write 25 sample orders to the configured data file
//! carvet seed
//!
//! # More orders, overwriting an existing file
//! carvet seed --count 100 --force
//!
//! # Reproducible book at an explicit path
//! carvet seed --out demo.json --seed 42
//! ```
//!
//! Roughly a quarter of the generated orders carry one deliberate data
//! defect (short phone, missing VIN, drifted total, ...) so `carvet check`
//! has something to flag on a fresh book.
//!
//! # Environment Variables
//!
//! - `CARVET_DATA` - Path of the order book JSON file (`--out` overrides)

use std::path::PathBuf;

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::info;

use carvet_core::{
    CurrencyCode, ItemId, Money, Order, OrderId, OrderItem, OrderStatus, PaymentStatus,
    ProductCode,
};

use crate::config::CliConfig;
use crate::data;

const FIRST_NAMES: &[&str] = &[
    "Jan", "Petra", "Martin", "Lucie", "Tomáš", "Eva", "Pavel", "Hana", "Jiří", "Markéta",
];

const LAST_NAMES: &[&str] = &[
    "Novák",
    "Svobodová",
    "Procházka",
    "Dvořáková",
    "Černý",
    "Veselá",
    "Horák",
    "Marešová",
    "Pokorný",
    "Králová",
];

const CITIES: &[(&str, &str)] = &[
    ("Praha", "110 00"),
    ("Brno", "602 00"),
    ("Ostrava", "702 00"),
    ("Plzeň", "301 00"),
    ("Olomouc", "779 00"),
    ("Liberec", "460 01"),
    ("Hradec Králové", "500 02"),
];

const STREETS: &[&str] = &[
    "Dlouhá", "Krátká", "Nádražní", "Hlavní", "Polní", "Zahradní", "Lipová", "Školní",
];

const VEHICLES: &[(&str, &[&str])] = &[
    ("Škoda", &["Octavia", "Fabia", "Superb", "Kodiaq"]),
    ("Volkswagen", &["Golf", "Passat", "Tiguan"]),
    ("BMW", &["320d", "X3", "118i"]),
    ("Audi", &["A4", "Q5"]),
    ("Toyota", &["Corolla", "RAV4"]),
    ("Hyundai", &["i30", "Tucson"]),
    ("Ford", &["Focus", "Kuga"]),
];

const EMAIL_DOMAINS: &[&str] = &["seznam.cz", "gmail.com", "email.cz", "centrum.cz"];

// VIN charset excludes I, O, Q.
const VIN_CHARSET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

const INSPECTIONS: &[ProductCode] = &[
    ProductCode::InspectionStandard,
    ProductCode::InspectionPremium,
    ProductCode::InspectionProfessional,
];

/// Generate `count` sample orders and write them to the data file.
///
/// The same `--seed` always produces the same random stream, so seeded
/// books are reproducible up to the generation timestamps.
///
/// # Errors
///
/// Returns an error when the data file already exists (without `--force`)
/// or cannot be written.
pub fn run(
    count: usize,
    force: bool,
    out: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_data_path(out);

    if config.data_path.exists() && !force {
        return Err(format!(
            "Data file already exists: {} (pass --force to overwrite)",
            config.data_path.display()
        )
        .into());
    }

    let mut rng = match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    };
    let orders: Vec<Order> = (1..=count).map(|seq| sample_order(&mut rng, seq)).collect();

    data::save_orders(&config.data_path, &orders)?;

    info!(
        "Seeded {} orders into {}",
        orders.len(),
        config.data_path.display()
    );
    info!("Try: carvet list, carvet check, carvet show ORD0001");
    Ok(())
}

const FALLBACK_VEHICLE: (&str, &[&str]) = ("Škoda", &["Octavia"]);

fn sample_order(rng: &mut impl Rng, seq: usize) -> Order {
    let id = OrderId::new(format!("ORD{seq:04}"));
    let first_name = pick(rng, FIRST_NAMES, "Jan");
    let last_name = pick(rng, LAST_NAMES, "Novák");
    let (city, postal_code) = pick(rng, CITIES, ("Praha", "110 00"));
    let (manufacturer, models) = pick(rng, VEHICLES, FALLBACK_VEHICLE);
    let model = pick(rng, models, "Octavia");

    let placed = Utc::now()
        - Duration::days(rng.random_range(0..120))
        - Duration::minutes(rng.random_range(0..1_440));

    // Main inspection line, occasionally plus a travel surcharge.
    let inspection = pick(rng, INSPECTIONS, ProductCode::InspectionStandard);
    let inspection_price = inspection.list_price_czk().unwrap_or(2_990);
    let mut items = vec![OrderItem::new(
        ItemId::new(format!("{}-1", id.as_str())),
        inspection,
        1,
        Money::czk(inspection_price),
    )];
    if rng.random_range(0..10) < 2 {
        items.push(OrderItem::new(
            ItemId::new(format!("{}-2", id.as_str())),
            ProductCode::TravelSurcharge,
            1,
            Money::czk(500),
        ));
    }

    let total: Decimal = items.iter().map(|item| item.total_price.amount).sum();
    let mut order = Order::new(id.clone(), Money::new(total, CurrencyCode::CZK), placed);
    order.items = items;

    order.first_name = first_name.to_owned();
    order.last_name = last_name.to_owned();
    order.email = format!(
        "{}.{}@{}",
        ascii_fold(first_name),
        ascii_fold(last_name),
        pick(rng, EMAIL_DOMAINS, "seznam.cz")
    );
    order.phone = format!("+420{}", random_digits(rng, 9));
    order.address = format!(
        "{} {}",
        pick(rng, STREETS, "Dlouhá"),
        rng.random_range(1..60)
    );
    order.postal_code = postal_code.to_owned();
    order.city = city.to_owned();
    order.manufacturer = Some(manufacturer.to_owned());
    order.model = Some(model.to_owned());
    order.vin = Some(random_vin(rng));
    order.listing_url = Some(format!(
        "https://www.sauto.cz/inzerat/{}",
        rng.random_range(10_000_000..100_000_000u64)
    ));

    assign_workflow(rng, &mut order);

    if seq % 4 == 0 {
        inject_defect(rng, &mut order);
    }
    order
}

/// Pick a workflow stage and keep the dependent fields consistent with it.
fn assign_workflow(rng: &mut impl Rng, order: &mut Order) {
    let stage = rng.random_range(0..10);
    let status = match stage {
        0..=1 => OrderStatus::Assigned,
        2..=3 => OrderStatus::TechnicianEnRoute,
        4..=5 => OrderStatus::InspectionInProgress,
        6..=8 => OrderStatus::Completed,
        _ => OrderStatus::VehicleUnavailableReturnable,
    };
    order.record_status(status, None);

    order.payment_status = if status == OrderStatus::Completed || rng.random_range(0..10) < 6 {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Unpaid
    };

    if status == OrderStatus::Completed {
        order.report_url = Some(format!("https://reports.carvet.cz/{}", order.id));
    }
    if order.payment_status == PaymentStatus::Paid {
        order.document_number = Some(format!("FV-2024-{}", random_digits(rng, 4)));
    }
}

/// Break exactly one thing on the order so the quality rules fire.
fn inject_defect(rng: &mut impl Rng, order: &mut Order) {
    match rng.random_range(0..7) {
        0 => order.phone = rng.random_range(100..100_000).to_string(),
        1 => order.email = order.email.replace('@', "."),
        2 => order.vin = None,
        3 => {
            order.order_value = Money::new(
                order.order_value.amount + Decimal::from(500),
                order.order_value.currency_code,
            );
        }
        4 => order.city = String::new(),
        5 => order.document_number = None,
        _ => order.report_url = None,
    }
}

/// Uniform pick from a constant table; `fallback` covers the empty slice.
fn pick<T: Copy>(rng: &mut impl Rng, items: &[T], fallback: T) -> T {
    items.choose(rng).copied().unwrap_or(fallback)
}

fn random_digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn random_vin(rng: &mut impl Rng) -> String {
    (0..17)
        .map(|_| char::from(pick(rng, VIN_CHARSET, b'T')))
        .collect()
}

/// Strip Czech diacritics for email-safe names.
fn ascii_fold(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'č' => 'c',
            'ď' => 'd',
            'é' | 'ě' => 'e',
            'í' => 'i',
            'ň' => 'n',
            'ó' => 'o',
            'ř' => 'r',
            'š' => 's',
            'ť' => 't',
            'ú' | 'ů' => 'u',
            'ý' => 'y',
            'ž' => 'z',
            other => other,
        })
        .collect()
}
