use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use serde_json::json;

use hassfest::domain::entities::Integrations;
use hassfest::domain::services::zeroconf::{collect_service_types, render_service_types};
use hassfest::infrastructure::MemoryFs;
use hassfest::{Integration, Manifest};

const SERVICE_TYPES: &[&str] = &[
    "_hap._tcp.local.",
    "_hue._tcp.local.",
    "_googlecast._tcp.local.",
    "_http._tcp.local.",
    "_printer._tcp.local.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Missing,
    WithoutStep,
    WithStep,
}

#[derive(Debug, Clone)]
struct Shape {
    zeroconf: Option<Vec<&'static str>>,
    flow: Flow,
}

impl Shape {
    fn passes(&self) -> bool {
        self.flow == Flow::WithStep && self.declares()
    }

    fn declares(&self) -> bool {
        self.zeroconf.as_ref().is_some_and(|z| !z.is_empty())
    }
}

fn flow_strategy() -> impl Strategy<Value = Flow> {
    prop_oneof![
        Just(Flow::Missing),
        Just(Flow::WithoutStep),
        Just(Flow::WithStep),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (
        prop::option::of(prop::collection::vec(
            prop::sample::select(SERVICE_TYPES),
            0..4,
        )),
        flow_strategy(),
    )
        .prop_map(|(zeroconf, flow)| Shape { zeroconf, flow })
}

fn build(shapes: &BTreeMap<String, Shape>) -> (Integrations, MemoryFs) {
    let mut fs = MemoryFs::new();
    let mut integrations = Integrations::new();

    for (domain, shape) in shapes {
        let path = format!("/repo/components/{domain}");
        let mut integration = Integration::new(domain.as_str(), path.as_str());
        if let Some(zeroconf) = &shape.zeroconf {
            integration = integration
                .with_manifest(Manifest::from_value(json!({ "zeroconf": zeroconf })).unwrap());
        }
        fs = match shape.flow {
            Flow::Missing => fs,
            Flow::WithoutStep => fs.with_file(
                format!("{path}/config_flow.py"),
                "async def async_step_user(self):\n",
            ),
            Flow::WithStep => fs.with_file(
                format!("{path}/config_flow.py"),
                "    async def async_step_zeroconf(self, info):\n",
            ),
        };
        integrations.insert(domain.clone(), integration);
    }

    (integrations, fs)
}

fn shapes_strategy() -> impl Strategy<Value = BTreeMap<String, Shape>> {
    prop::collection::btree_map("[a-z]{1,6}", shape_strategy(), 0..8)
}

proptest! {
    #[test]
    fn keys_are_service_types_of_passing_domains(shapes in shapes_strategy()) {
        let (integrations, fs) = build(&shapes);
        let collection = collect_service_types(&integrations, &fs).unwrap();

        let expected: BTreeSet<&str> = shapes
            .values()
            .filter(|s| s.passes())
            .flat_map(|s| s.zeroconf.clone().unwrap_or_default())
            .collect();
        let actual: BTreeSet<&str> = collection.table.service_types().collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn one_finding_per_declaring_domain_without_step(shapes in shapes_strategy()) {
        let (integrations, fs) = build(&shapes);
        let collection = collect_service_types(&integrations, &fs).unwrap();

        let expected: Vec<&str> = shapes
            .iter()
            .filter(|(_, s)| s.declares() && s.flow != Flow::WithStep)
            .map(|(d, _)| d.as_str())
            .collect();
        let actual: Vec<&str> = collection
            .errors
            .iter()
            .filter_map(|e| e.domain.as_deref())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn domain_lists_are_ascending(shapes in shapes_strategy()) {
        let (integrations, fs) = build(&shapes);
        let collection = collect_service_types(&integrations, &fs).unwrap();

        for service_type in collection.table.service_types() {
            let domains = collection.table.get(service_type).unwrap();
            prop_assert!(domains.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn rendering_is_deterministic(shapes in shapes_strategy()) {
        let (integrations, fs) = build(&shapes);
        let collection = collect_service_types(&integrations, &fs).unwrap();

        let first = render_service_types(&collection.table).unwrap();
        let second = render_service_types(&collection.table).unwrap();

        prop_assert_eq!(first, second);
    }
}
