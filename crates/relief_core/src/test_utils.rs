pub mod reference_scenario {
    //! Two centers, five need sites and nine roads around Haldwani and Nainital.
    //! Only the Nainital to Mukteshwar road is blocked.

    use crate::{
        model::{
            accessibility::Accessibility,
            center::{Center, CenterStatus},
            kilometers::Kilometers,
            location::{Location, LocationId},
            minutes::Minutes,
            need_site::{NeedSite, NeedSiteStatus},
            resources::Resources,
            road_segment::{RoadCondition, RoadSegment, RoadSegmentId},
            severity::Severity,
        },
        snapshot::GraphSnapshot,
    };

    pub const HALDWANI: &str = "center-haldwani";
    pub const NAINITAL: &str = "center-nainital";

    pub const RAMPUR: &str = "area-rampur";
    pub const KATHGODAM: &str = "area-kathgodam";
    pub const BHOWALI: &str = "area-bhowali";
    pub const MUKTESHWAR: &str = "area-mukteshwar";
    pub const RAMNAGAR: &str = "area-ramnagar";

    fn center(id: &str, name: &str, position: (f64, f64), resources: Resources) -> Center {
        Center {
            id: LocationId::new(id),
            name: name.to_string(),
            latitude: position.0,
            longitude: position.1,
            resources,
            status: CenterStatus::Active,
        }
    }

    fn area(
        id: &str,
        name: &str,
        position: (f64, f64),
        people_affected: u32,
        severity: u8,
        access_difficulty: Accessibility,
        resources_needed: Resources,
    ) -> NeedSite {
        NeedSite {
            id: LocationId::new(id),
            name: name.to_string(),
            latitude: position.0,
            longitude: position.1,
            people_affected,
            severity: Severity::new(severity).unwrap(),
            access_difficulty,
            resources_needed,
            priority_score: 0.0,
            status: NeedSiteStatus::Pending,
        }
    }

    fn segment(
        from: &str,
        to: &str,
        distance: f64,
        travel_time: f64,
        road_condition: RoadCondition,
    ) -> RoadSegment {
        RoadSegment {
            id: RoadSegmentId::new(format!("road-{}-{}", short(from), short(to))),
            from_location: LocationId::new(from),
            to_location: LocationId::new(to),
            distance: Kilometers::new(distance),
            travel_time: Minutes::new(travel_time),
            is_blocked: false,
            road_condition,
        }
    }

    fn short(id: &str) -> &str {
        id.split_once('-').map_or(id, |(_, name)| name)
    }

    /// Need site at a fixed position with no resource needs.
    pub fn need_site(id: &str, severity: u8, people_affected: u32, access: Accessibility) -> NeedSite {
        area(
            id,
            id,
            (29.3, 79.5),
            people_affected,
            severity,
            access,
            Resources::EMPTY,
        )
    }

    /// Open road in good condition, three minutes per kilometer.
    pub fn road(id: &str, from: &str, to: &str, distance: f64) -> RoadSegment {
        RoadSegment {
            id: RoadSegmentId::new(id),
            ..segment(from, to, distance, distance * 3.0, RoadCondition::Good)
        }
    }

    pub fn centers() -> Vec<Center> {
        vec![
            center(
                HALDWANI,
                "Haldwani Central Hub",
                (29.2183, 79.5130),
                Resources::new(500, 1000, 200),
            ),
            center(
                NAINITAL,
                "Nainital Relief Center",
                (29.3803, 79.4636),
                Resources::new(300, 600, 150),
            ),
        ]
    }

    pub fn need_sites() -> Vec<NeedSite> {
        vec![
            area(
                RAMPUR,
                "Rampur Village",
                (29.2500, 79.5500),
                450,
                5,
                Accessibility::Difficult,
                Resources::new(250, 500, 80),
            ),
            area(
                KATHGODAM,
                "Kathgodam Town",
                (29.2644, 79.5269),
                320,
                4,
                Accessibility::Easy,
                Resources::new(180, 350, 60),
            ),
            area(
                BHOWALI,
                "Bhowali Area",
                (29.3850, 79.5050),
                280,
                3,
                Accessibility::Difficult,
                Resources::new(150, 300, 45),
            ),
            area(
                MUKTESHWAR,
                "Mukteshwar Hills",
                (29.4717, 79.6473),
                180,
                4,
                Accessibility::Difficult,
                Resources::new(100, 200, 35),
            ),
            area(
                RAMNAGAR,
                "Ramnagar Colony",
                (29.3942, 79.1289),
                220,
                2,
                Accessibility::Easy,
                Resources::new(120, 250, 30),
            ),
        ]
    }

    pub fn road_segments() -> Vec<RoadSegment> {
        let mut blocked = segment(NAINITAL, MUKTESHWAR, 18.5, 55.0, RoadCondition::Damaged);
        blocked.is_blocked = true;

        vec![
            segment(HALDWANI, RAMPUR, 5.2, 15.0, RoadCondition::Good),
            segment(HALDWANI, KATHGODAM, 8.5, 25.0, RoadCondition::Good),
            segment(NAINITAL, BHOWALI, 12.0, 35.0, RoadCondition::Fair),
            blocked,
            segment(RAMPUR, KATHGODAM, 4.0, 12.0, RoadCondition::Good),
            segment(KATHGODAM, BHOWALI, 15.0, 40.0, RoadCondition::Fair),
            segment(HALDWANI, NAINITAL, 22.0, 60.0, RoadCondition::Excellent),
            segment(HALDWANI, RAMNAGAR, 28.0, 75.0, RoadCondition::Good),
            segment(BHOWALI, MUKTESHWAR, 14.0, 45.0, RoadCondition::Fair),
        ]
    }

    pub fn snapshot() -> GraphSnapshot {
        let locations = centers()
            .into_iter()
            .map(Location::from)
            .chain(need_sites().into_iter().map(Location::from))
            .collect();

        GraphSnapshot::new(locations, road_segments())
    }
}
