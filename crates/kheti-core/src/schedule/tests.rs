use jiff::civil::date;

use super::*;
use crate::{
    catalog,
    error::KhetiError,
    models::{CropCategory, IrrigationMethod},
};

fn request(category: CropCategory, crop: &str, irrigation: IrrigationMethod) -> PlanRequest {
    PlanRequest {
        category,
        crop: crop.to_string(),
        irrigation,
        area_acre: 2.0,
        sowing_iso: "2025-06-01".to_string(),
        locale: Some(Locale::En),
    }
}

fn rice(irrigation: IrrigationMethod) -> PlanRequest {
    request(CropCategory::Cereal, "Rice", irrigation)
}

/// Every combination of category, catalog crop and irrigation method.
fn all_requests() -> Vec<PlanRequest> {
    let mut requests = Vec::new();
    for crop in catalog::crops() {
        for method in IrrigationMethod::ALL {
            for locale in Locale::ALL {
                let mut req = request(crop.category, crop.name, method);
                req.locale = Some(locale);
                requests.push(req);
            }
        }
    }
    requests
}

#[test]
fn test_rice_rainfed_scenario() {
    let plan = generate_plan(&rice(IrrigationMethod::Rainfed)).unwrap();

    assert_eq!(plan.start, date(2025, 6, 1));
    assert_eq!(plan.end, date(2025, 9, 29));
    assert_eq!(plan.duration_days(), 120);

    let first = &plan.tasks[0];
    assert_eq!(first.date, date(2025, 5, 22));
    assert_eq!(first.title, "Field prep");

    let irrigation: Vec<_> = plan.tasks_of(TaskKind::Irrigation).map(|t| t.date).collect();
    assert_eq!(irrigation, vec![date(2025, 6, 21), date(2025, 7, 26)]);
}

#[test]
fn test_drip_irrigation_scenario() {
    let plan = generate_plan(&rice(IrrigationMethod::Drip)).unwrap();
    let offsets: Vec<i32> = plan
        .tasks_of(TaskKind::Irrigation)
        .map(|t| (t.date - plan.start).get_days())
        .collect();

    assert_eq!(offsets.first(), Some(&3));
    assert_eq!(offsets.last(), Some(&108));
    assert!(offsets.windows(2).all(|w| w[1] - w[0] == 3));
    assert!(offsets.iter().all(|&d| d < 110));
}

#[test]
fn test_crop_override_scenario() {
    let plan = generate_plan(&request(
        CropCategory::Pulses,
        "Tur (Pigeon Pea)",
        IrrigationMethod::Rainfed,
    ))
    .unwrap();
    assert_eq!(plan.duration_days(), 150);
    assert_eq!(plan.end, date(2025, 10, 29));

    let base = generate_plan(&request(
        CropCategory::Pulses,
        "Horse gram",
        IrrigationMethod::Rainfed,
    ))
    .unwrap();
    assert_eq!(base.duration_days(), 110);
}

#[test]
fn test_marathi_scenario() {
    let mut req = rice(IrrigationMethod::Rainfed);
    req.locale = Some(Locale::Mr);
    let plan = generate_plan(&req).unwrap();

    assert_eq!(plan.stages[0].name, "जमीन तयार");
    assert_eq!(plan.tasks[0].title, "शेतीची तयारी");
    assert!(plan.tasks.iter().any(|t| t.title == "सिंचन (कोरडे असल्यास)"));
}

#[test]
fn test_invalid_date_scenario() {
    let mut req = rice(IrrigationMethod::Rainfed);
    req.sowing_iso = "not-a-date".to_string();

    match generate_plan(&req) {
        Err(KhetiError::InvalidInput { field, .. }) => assert_eq!(field, "sowingISO"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_invalid_crop_and_area() {
    let mut req = rice(IrrigationMethod::Flood);
    req.crop = String::new();
    assert!(generate_plan(&req).unwrap_err().is_invalid_input());

    let mut req = rice(IrrigationMethod::Flood);
    req.area_acre = -2.0;
    assert!(generate_plan(&req).unwrap_err().is_invalid_input());
}

#[test]
fn test_generation_is_deterministic() {
    for req in all_requests() {
        let a = generate_plan(&req).unwrap().to_json_pretty().unwrap();
        let b = generate_plan(&req).unwrap().to_json_pretty().unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_tasks_are_date_ordered() {
    for req in all_requests() {
        let plan = generate_plan(&req).unwrap();
        assert!(
            plan.tasks.windows(2).all(|w| w[0].date <= w[1].date),
            "{} / {:?}",
            req.crop,
            req.irrigation
        );
    }
}

#[test]
fn test_dates_are_offsets_from_sowing() {
    for req in all_requests() {
        let plan = generate_plan(&req).unwrap();
        let template = template_for(req.category, &req.crop).unwrap();

        assert_eq!(plan.duration_days(), template.duration_days);
        assert_eq!(plan.stages.len(), template.stages.len());
        for (resolved, stage) in plan.stages.iter().zip(template.stages) {
            assert_eq!((resolved.start - plan.start).get_days(), stage.start_day);
            assert_eq!((resolved.end - plan.start).get_days(), stage.end_day);
        }

        let mut expected: Vec<i32> = template
            .base_tasks
            .iter()
            .chain(&build_irrigation_tasks(req.irrigation, template.duration_days))
            .map(|t| t.day)
            .collect();
        expected.sort();
        let actual: Vec<i32> = plan
            .tasks
            .iter()
            .map(|t| (t.date - plan.start).get_days())
            .collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_recurring_irrigation_respects_dry_down() {
    for req in all_requests() {
        if req.irrigation == IrrigationMethod::Rainfed || req.locale != Some(Locale::En) {
            continue;
        }
        let plan = generate_plan(&req).unwrap();
        let limit = plan.duration_days() - 10;
        let recurring: Vec<_> = plan
            .tasks_of(TaskKind::Irrigation)
            .filter(|t| t.description.starts_with("Irrigate based on soil moisture"))
            .collect();
        assert!(!recurring.is_empty());
        assert!(
            recurring
                .iter()
                .all(|t| (t.date - plan.start).get_days() < limit)
        );
    }
}

#[test]
fn test_only_fertilizer_descriptions_are_annotated() {
    for locale in Locale::ALL {
        let mut req = request(CropCategory::Vegetable, "Okra (Bhendi)", IrrigationMethod::Drip);
        req.locale = Some(locale);
        let plan = generate_plan(&req).unwrap();
        let template = template_for(req.category, &req.crop).unwrap();

        for task in plan.tasks.iter().filter(|t| t.kind != TaskKind::Fertilizer) {
            assert!(!task.description.contains("Quantity based on"));
        }
        for base in template.base_tasks.iter().filter(|t| t.kind != TaskKind::Fertilizer) {
            let translated = translate(base.description, locale);
            assert!(plan.tasks.iter().any(|t| t.description == translated));
        }
    }
}

#[test]
fn test_fertilizer_area_suffix() {
    let mut req = rice(IrrigationMethod::Rainfed);
    req.area_acre = 2.5;
    let plan = generate_plan(&req).unwrap();
    let basal = plan.tasks_of(TaskKind::Fertilizer).next().unwrap();
    assert_eq!(
        basal.description,
        "Apply NPK 10:26:26 @ 50 kg/acre and FYM 1–2 tons/acre during final harrow. \
         Quantity based on 2.5 acre(s)."
    );

    let plan = generate_plan(&rice(IrrigationMethod::Rainfed)).unwrap();
    assert!(
        plan.tasks_of(TaskKind::Fertilizer)
            .all(|t| t.description.ends_with(". Quantity based on 2 acre(s)."))
    );
}

#[test]
fn test_fertilizer_suffix_follows_translation() {
    let mut req = rice(IrrigationMethod::Rainfed);
    req.locale = Some(Locale::Hi);
    let plan = generate_plan(&req).unwrap();
    let top_dress = plan
        .tasks_of(TaskKind::Fertilizer)
        .find(|t| t.date == date(2025, 6, 16))
        .unwrap();
    assert_eq!(
        top_dress.description,
        "पहली सिंचाई/बारिश के बाद कतारों में यूरिया @ 30 किग्रा/एकड़ दें. Quantity based on 2 acre(s)."
    );
}

#[test]
fn test_equal_offsets_keep_template_order() {
    // Pulses have "Weeding" on day 20 and the rain-fed reminder on day 20.
    let plan = generate_plan(&request(
        CropCategory::Pulses,
        "Chana (Gram)",
        IrrigationMethod::Rainfed,
    ))
    .unwrap();
    let day_20: Vec<_> = plan
        .tasks
        .iter()
        .filter(|t| t.date == date(2025, 6, 21))
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(day_20, vec!["Weeding", "Irrigation (if dry)"]);
}

#[test]
fn test_every_plan_string_is_translated() {
    for req in all_requests() {
        let plan = generate_plan(&req).unwrap();
        let template = template_for(req.category, &req.crop).unwrap();
        for stage in template.stages {
            assert!(crate::i18n::is_known(stage.name), "{}", stage.name);
        }
        for task in template.base_tasks {
            assert!(crate::i18n::is_known(task.title), "{}", task.title);
            assert!(crate::i18n::is_known(task.description), "{}", task.description);
        }
        for task in build_irrigation_tasks(req.irrigation, plan.duration_days()) {
            assert!(crate::i18n::is_known(task.description), "{}", task.description);
        }
    }
}

#[test]
fn test_weekly_calendar_buckets() {
    let plan = generate_plan(&rice(IrrigationMethod::Rainfed)).unwrap();
    let calendar = plan.calendar();

    // 2025-06-01 through 2025-09-29 is 121 days: 18 week starts.
    assert_eq!(calendar.weeks.len(), 18);
    assert_eq!(calendar.weeks[0].start, date(2025, 6, 1));
    assert_eq!(calendar.weeks[0].end, date(2025, 6, 7));
    assert_eq!(calendar.weeks[17].start, date(2025, 9, 28));
    assert_eq!(calendar.weeks[17].week, 18);

    let pre: Vec<_> = calendar.pre_sowing.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(pre, vec!["Field prep", "Basal fertilizer"]);
    assert!(calendar.post_harvest.is_empty());

    let bucketed: usize = calendar.weeks.iter().map(|w| w.tasks.len()).sum();
    assert_eq!(bucketed + calendar.pre_sowing.len(), plan.tasks.len());
    assert!(calendar.weeks[0].tasks.iter().any(|t| t.title == "Sowing"));
    assert!(calendar.busy_weeks().count() < calendar.weeks.len());
}

#[test]
fn test_weekly_calendar_keeps_late_tasks() {
    // Moong is a 70 day crop; the Pulses tasks on days 90 and 105 stay in
    // the plan after the last week.
    let plan = generate_plan(&request(
        CropCategory::Pulses,
        "Moong (Green Gram)",
        IrrigationMethod::Rainfed,
    ))
    .unwrap();
    let calendar = plan.calendar();

    let late: Vec<_> = calendar.post_harvest.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(late, vec!["Irrigation stop", "Harvest"]);
    let total = calendar.pre_sowing.len()
        + calendar.weeks.iter().map(|w| w.tasks.len()).sum::<usize>()
        + calendar.post_harvest.len();
    assert_eq!(total, plan.tasks.len());
}
