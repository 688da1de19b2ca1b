//! Fixed task templates the schedule is built from.

use crate::models::{Environment, Method, Stage};

/// Name of a templated task.
#[derive(Debug, Clone, Copy)]
pub enum TaskName {
    Fixed(&'static str),
    /// Depends on whether the crop is sown directly or planted out.
    ByMethod {
        seed: &'static str,
        planted: &'static str,
    },
}

impl TaskName {
    pub fn resolve(&self, method: Method) -> &'static str {
        match *self {
            TaskName::Fixed(name) => name,
            TaskName::ByMethod { seed, planted } => match method {
                Method::Seed => seed,
                Method::Transplant | Method::Grafting => planted,
            },
        }
    }
}

/// One row of the schedule template.
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub name: TaskName,
    pub stage: Stage,
    /// Days from the start date, before the environment factor is applied
    pub offset_days: i64,
    pub checklist: &'static [&'static str],
}

/// Tasks every plan receives, in emission order.
pub const BASE_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        name: TaskName::Fixed("prep/inspection (pre-transplant)"),
        stage: Stage::Transplant,
        offset_days: -2,
        checklist: &[
            "soil/substrate moisture",
            "irrigation EC/pH",
            "tool disinfection",
        ],
    },
    TaskTemplate {
        name: TaskName::ByMethod {
            seed: "sowing",
            planted: "transplanting",
        },
        stage: Stage::Transplant,
        offset_days: 0,
        checklist: &["planting density compliance", "seedling vigor check"],
    },
    TaskTemplate {
        name: TaskName::Fixed("establishment care"),
        stage: Stage::Establish,
        offset_days: 5,
        checklist: &[
            "shading in heat/drought",
            "maintain soil moisture",
            "early disease watch",
        ],
    },
    TaskTemplate {
        name: TaskName::Fixed("training/pinching"),
        stage: Stage::Veg,
        offset_days: 24,
        checklist: &["main stem training", "sucker removal"],
    },
    TaskTemplate {
        name: TaskName::Fixed("supplemental fertigation"),
        stage: Stage::Veg,
        offset_days: 28,
        checklist: &["EC/pH check", "avoid excess nitrogen"],
    },
    TaskTemplate {
        name: TaskName::Fixed("flowering/pollination care"),
        stage: Stage::Flower,
        offset_days: 42,
        checklist: &["pollination assist if needed", "bloom-stage pest control"],
    },
    TaskTemplate {
        name: TaskName::Fixed("pest control"),
        stage: Stage::Flower,
        offset_days: 48,
        checklist: &["thrips/aphid scouting", "replace sticky traps"],
    },
    TaskTemplate {
        name: TaskName::Fixed("expected first harvest"),
        stage: Stage::Harvest,
        offset_days: 70,
        checklist: &["standard harvest indicators", "quality control"],
    },
];

const GREENHOUSE_TASKS: &[TaskTemplate] = &[TaskTemplate {
    name: TaskName::Fixed("ventilation/humidity management"),
    stage: Stage::Veg,
    offset_days: 20,
    checklist: &["night condensation prevention", "shade curtain check"],
}];

const HYDROPONIC_TASKS: &[TaskTemplate] = &[TaskTemplate {
    name: TaskName::Fixed("nutrient solution check"),
    stage: Stage::Veg,
    offset_days: 18,
    checklist: &["EC/pH/temperature check", "drain-rate monitoring"],
}];

/// Extra tasks appended after the base tasks for an environment.
pub fn environment_tasks(environment: Environment) -> &'static [TaskTemplate] {
    match environment {
        Environment::Open => &[],
        Environment::Greenhouse => GREENHOUSE_TASKS,
        Environment::Hydroponic => HYDROPONIC_TASKS,
    }
}
