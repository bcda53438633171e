// src/calculators/readiness.rs

//! Move-in readiness checklist score.

use crate::forms::FormData;
use serde::Serialize;

/// Flat time estimate per unfinished item.
pub const HOURS_PER_ITEM: f64 = 0.75;
pub const READY_FROM: u32 = 90;
pub const ALMOST_FROM: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cleaning,
    Repairs,
    Safety,
    Utilities,
    Paperwork,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Cleaning,
        Category::Repairs,
        Category::Safety,
        Category::Utilities,
        Category::Paperwork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Cleaning => "Cleaning",
            Category::Repairs => "Repairs",
            Category::Safety => "Safety",
            Category::Utilities => "Utilities",
            Category::Paperwork => "Paperwork & Keys",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
}

const fn item(id: &'static str, category: Category, label: &'static str) -> ChecklistItem {
    ChecklistItem {
        id,
        category,
        label,
    }
}

pub const CHECKLIST: &[ChecklistItem] = &[
    item("deep_clean", Category::Cleaning, "Deep clean kitchen and baths"),
    item("carpets", Category::Cleaning, "Carpets cleaned or floors mopped"),
    item("appliances_clean", Category::Cleaning, "Appliances wiped inside and out"),
    item("windows", Category::Cleaning, "Windows and blinds cleaned"),
    item("paint_touchup", Category::Repairs, "Paint touched up"),
    item("plumbing", Category::Repairs, "No leaks under sinks or at toilets"),
    item("doors_locks", Category::Repairs, "Doors, locks and windows operate"),
    item("fixtures", Category::Repairs, "Light fixtures and bulbs working"),
    item("smoke_detectors", Category::Safety, "Smoke detectors tested"),
    item("co_detectors", Category::Safety, "CO detectors tested"),
    item("rekey", Category::Safety, "Locks rekeyed"),
    item("extinguisher", Category::Safety, "Fire extinguisher present"),
    item("utilities_on", Category::Utilities, "Utilities on or transfer scheduled"),
    item("hvac", Category::Utilities, "HVAC serviced, filter replaced"),
    item("water_heater", Category::Utilities, "Water heater checked"),
    item("internet_info", Category::Utilities, "Internet provider info ready"),
    item("lease_signed", Category::Paperwork, "Lease signed"),
    item("deposit", Category::Paperwork, "Deposit and first month collected"),
    item("move_in_photos", Category::Paperwork, "Move-in condition photos taken"),
    item("keys_ready", Category::Paperwork, "Keys, fobs and remotes labeled"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Ready,
    Almost,
    NotReady,
}

impl ReadinessLevel {
    pub fn for_score(score: u32) -> Self {
        if score >= READY_FROM {
            ReadinessLevel::Ready
        } else if score >= ALMOST_FROM {
            ReadinessLevel::Almost
        } else {
            ReadinessLevel::NotReady
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessLevel::Ready => "Ready for move-in",
            ReadinessLevel::Almost => "Almost there",
            ReadinessLevel::NotReady => "Not ready yet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub checked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessResult {
    pub checked: usize,
    pub total: usize,
    /// 0..=100
    pub score: u32,
    pub level: ReadinessLevel,
    pub remaining_hours: f64,
    pub categories: Vec<CategoryProgress>,
}

/// Ids of the items ticked on the form. Unknown ids are ignored.
pub fn checked_ids(form: &FormData) -> Vec<&'static str> {
    CHECKLIST
        .iter()
        .filter(|item| crate::domain::normalize::flag(form.get(item.id)))
        .map(|item| item.id)
        .collect()
}

pub fn score(checked: &[&str]) -> ReadinessResult {
    let is_checked = |item: &ChecklistItem| checked.contains(&item.id);

    let total = CHECKLIST.len();
    let done = CHECKLIST.iter().filter(|i| is_checked(i)).count();

    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let items = CHECKLIST.iter().filter(|i| i.category == category);
            CategoryProgress {
                category,
                checked: items.clone().filter(|i| is_checked(i)).count(),
                total: items.count(),
            }
        })
        .collect();

    let score = if total == 0 {
        0
    } else {
        (done as f64 / total as f64 * 100.0).round() as u32
    };

    ReadinessResult {
        checked: done,
        total,
        score,
        level: ReadinessLevel::for_score(score),
        remaining_hours: (total - done) as f64 * HOURS_PER_ITEM,
        categories,
    }
}
