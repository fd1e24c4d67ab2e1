use super::*;

fn kind(text: &str) -> RecordKind {
    classify(1, text.to_string()).kind
}

const TS: &str = "2024-03-01T20:15:05.0000000+08:00";

#[test]
fn classifies_zone_change() {
    let line = format!("01|{TS}|2F0|The Gilded Araya|00000000|");
    assert_eq!(
        kind(&line),
        RecordKind::ZoneChange {
            map_name: "The Gilded Araya".to_string()
        }
    );
}

#[test]
fn classifies_self_identity() {
    let line = format!("02|{TS}|10301234|Aloe Vera|");
    assert_eq!(
        kind(&line),
        RecordKind::SelfIdentity {
            actor_id: "10301234".to_string()
        }
    );
}

#[test]
fn self_identity_requires_fixed_width_id() {
    let line = format!("02|{TS}|1030|short|");
    assert_eq!(kind(&line), RecordKind::Ignored);
}

#[test]
fn classifies_network_action() {
    let line = format!("21|{TS}|10301234|Aloe Vera|8D2|Fire IV|40008EF5|Asura|");
    assert_eq!(
        kind(&line),
        RecordKind::NetworkAction {
            source_id: "10301234".to_string(),
            category: b'4',
        }
    );
}

#[test]
fn action_result_code_22_classifies_too() {
    let line = format!("22|{TS}|10301234|Aloe Vera|8D2|Fire IV|40008EF5|Asura|");
    assert!(matches!(kind(&line), RecordKind::NetworkAction { .. }));
}

#[test]
fn classifies_death() {
    let line = format!("25|{TS}|10301234|Aloe Vera|4000A1B2|Asura|");
    assert_eq!(
        kind(&line),
        RecordKind::Death {
            actor_id: "10301234".to_string()
        }
    );
}

#[test]
fn classifies_status_apply() {
    let line = format!("26|{TS}|82F|Damage Down|5.00|4000A1B2|Asura|10301234|Aloe Vera|");
    assert_eq!(
        kind(&line),
        RecordKind::StatusApply {
            status_name: "Damage Down".to_string(),
            caster_id: "4000A1B2".to_string(),
            target_id: "10301234".to_string(),
        }
    );
}

#[test]
fn classifies_director_event() {
    let line = format!("33|{TS}|80034E6C|40000006|00|00|00|");
    assert_eq!(
        kind(&line),
        RecordKind::DirectorEvent {
            subtype: "06".to_string()
        }
    );
}

#[test]
fn director_command_outside_namespace_is_ignored() {
    let line = format!("33|{TS}|80034E6C|80004000|00|00|00|");
    assert_eq!(kind(&line), RecordKind::Ignored);
}

#[test]
fn unknown_code_is_ignored() {
    let line = format!("39|{TS}|10301234|1|0|");
    assert_eq!(kind(&line), RecordKind::Ignored);
}

#[test]
fn short_field_count_is_ignored() {
    assert_eq!(kind(&format!("26|{TS}|82F|Damage Down|")), RecordKind::Ignored);
    assert_eq!(kind(&format!("21|{TS}|10301234|")), RecordKind::Ignored);
}

#[test]
fn malformed_timestamp_degrades_to_ignored() {
    let line = "01|yesterday around noon|2F0|Map A|";
    let parsed = classify(7, line.to_string());
    assert_eq!(parsed.kind, RecordKind::Ignored);
    assert!(parsed.timestamp.is_none());
    assert_eq!(parsed.line_number, 7);
}

#[test]
fn timestamp_prefix_is_parsed_to_the_second() {
    let parsed = classify(1, format!("25|{TS}|10301234|Aloe Vera|"));
    let timestamp = parsed.timestamp.unwrap();
    assert_eq!(timestamp.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-01 20:15:05");
    assert_eq!(parsed.timestamp_field, TS);
}

#[test]
fn terminators_stay_in_raw_but_not_in_fields() {
    let parsed = classify(1, format!("02|{TS}|10301234|Aloe Vera|\r\n"));
    assert!(parsed.raw.ends_with("\r\n"));
    assert_eq!(
        parsed.kind,
        RecordKind::SelfIdentity {
            actor_id: "10301234".to_string()
        }
    );
}

#[test]
fn empty_line_is_ignored() {
    let parsed = classify(3, "\n".to_string());
    assert_eq!(parsed.kind, RecordKind::Ignored);
    assert_eq!(parsed.raw, "\n");
}
