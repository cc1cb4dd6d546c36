use crate::errors::AppError;
use crate::model::Transmitter;
use std::collections::HashMap;

/// One satellite and its transmitters, in fetch order.
#[derive(Clone, Debug)]
pub struct SatelliteGroup {
    pub name: String,
    pub transmitters: Vec<Transmitter>,
}

/// Single forward pass; each record lands in the group keyed by its exact
/// `satellite_name`, created lazily on first encounter. Groups come out in
/// first-encounter order so downstream maximum selection has a stable
/// first-wins tie-break.
pub fn group_by_satellite(records: Vec<Transmitter>) -> Vec<SatelliteGroup> {
    let mut groups: Vec<SatelliteGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.satellite_name) {
            Some(&i) => groups[i].transmitters.push(record),
            None => {
                index.insert(record.satellite_name.clone(), groups.len());
                let name = record.satellite_name.clone();
                groups.push(SatelliteGroup { name, transmitters: vec![record] });
            }
        }
    }

    groups
}

/// Group with the most transmitters. Ties keep the first-encountered group.
pub fn largest_group(groups: &[SatelliteGroup]) -> Result<&SatelliteGroup, AppError> {
    let mut best: Option<&SatelliteGroup> = None;
    for group in groups {
        match best {
            Some(b) if group.transmitters.len() <= b.transmitters.len() => {}
            _ => best = Some(group),
        }
    }
    best.ok_or_else(|| AppError::Empty("no satellite groups to compare".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stat;

    fn tx(satellite: &str, uuid: &str) -> Transmitter {
        Transmitter {
            uuid: uuid.into(),
            description: "FM voice repeater".into(),
            satellite_name: satellite.into(),
            stat: Stat { total_count: 0, good_count: 0 },
        }
    }

    #[test]
    fn grouping_partitions_the_input() {
        let records = vec![
            tx("SAT-A", "1"),
            tx("SAT-B", "2"),
            tx("SAT-A", "3"),
            tx("SAT-C", "4"),
            tx("SAT-B", "5"),
            tx("SAT-A", "6"),
        ];
        let total = records.len();
        let groups = group_by_satellite(records);

        let grouped: usize = groups.iter().map(|g| g.transmitters.len()).sum();
        assert_eq!(grouped, total);
        for group in &groups {
            for t in &group.transmitters {
                assert_eq!(t.satellite_name, group.name);
            }
        }
    }

    #[test]
    fn groups_and_members_keep_encounter_order() {
        let groups = group_by_satellite(vec![
            tx("SAT-B", "1"),
            tx("SAT-A", "2"),
            tx("SAT-B", "3"),
        ]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["SAT-B", "SAT-A"]);
        let b_uuids: Vec<&str> =
            groups[0].transmitters.iter().map(|t| t.uuid.as_str()).collect();
        assert_eq!(b_uuids, ["1", "3"]);
    }

    #[test]
    fn biggest_group_wins() {
        let mut records: Vec<Transmitter> =
            (0..3).map(|i| tx("SAT-A", &format!("a{}", i))).collect();
        records.extend((0..5).map(|i| tx("SAT-B", &format!("b{}", i))));
        let groups = group_by_satellite(records);

        let winner = largest_group(&groups).unwrap();
        assert_eq!(winner.name, "SAT-B");
        assert_eq!(winner.transmitters.len(), 5);
    }

    #[test]
    fn tied_groups_keep_the_first_encountered() {
        let groups = group_by_satellite(vec![
            tx("SAT-A", "1"),
            tx("SAT-B", "2"),
            tx("SAT-A", "3"),
            tx("SAT-B", "4"),
        ]);
        let winner = largest_group(&groups).unwrap();
        assert_eq!(winner.name, "SAT-A");
    }

    #[test]
    fn no_groups_is_an_error() {
        let err = largest_group(&[]).unwrap_err();
        assert!(matches!(err, AppError::Empty(_)));
    }
}
