/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use wpt_mission::{parse_wpl, write_wpl, read_wpl_file, Mission, Waypoint, WptMissionError};

/// unit tests for QGC WPL 110 parsing/serializing
/// run with "cargo test -p wpt_mission --test test_wpl -- --nocapture"

const SAMPLE: &str = "QGC WPL 110\n\
0\t0\t16\t0\t0\t0\t0\t0\t0.00000000\t0.00000000\t0.000000\t1\n\
1\t3\t22\t0\t0\t0\t0\t0\t0.00000000\t0.00000000\t6.000000\t1\n\
2\t3\t16\t0\t0\t0\t0\t0\t39.46349200\t115.84604450\t6.000000\t1\n\
3\t3\t16\t0\t0\t0\t0\t0\t39.46350000\t115.84610000\t6.000000\t1";

#[test]
fn test_parse () {
    let mission = parse_wpl(SAMPLE).unwrap();
    assert_eq!( mission.len(), 4);

    let wp0 = &mission.waypoints[0];
    assert_eq!( wp0.index, 0);
    assert_eq!( wp0.frame, 0);
    assert_eq!( wp0.command, 16);
    assert_eq!( wp0.lat, Some(0.0));
    assert!( !wp0.has_position()); // 0/0 is the "no georeference" sentinel

    let wp2 = &mission.waypoints[2];
    assert_eq!( wp2.frame, 3);
    assert!( wp2.has_position());
    assert_eq!( wp2.lat, Some(39.463492));
    assert_eq!( wp2.lon, Some(115.8460445));
    assert_eq!( wp2.alt, Some(6.0));
    assert_eq!( wp2.autocontinue, Some(1));

    assert!( mission.waypoint(3).is_some());
    assert!( mission.waypoint(9).is_none());
}

#[test]
fn test_param_truncation () {
    // param fields may look like reals in the file but are truncated towards zero
    let contents = "QGC WPL 110\n5\t3\t178\t3.7\t-2.9\t0.0\t1.5\t0\t39.00000000\t116.00000000\t5.000000\t1";
    let mission = parse_wpl(contents).unwrap();

    let wp = &mission.waypoints[0];
    assert_eq!( wp.param0, 3);
    assert_eq!( wp.param1, -2);
    assert_eq!( wp.param2, 0);
    assert_eq!( wp.param3, 1);
}

#[test]
fn test_malformed_line_skipped () {
    let contents = format!("{}\nnot\ta\tvalid\trow\n4\t3\t16\t0\t0\t0\t0\t0\t39.0\t116.0\t5.0\t1", SAMPLE);
    let mission = parse_wpl(&contents).unwrap();
    assert_eq!( mission.len(), 5); // bad row dropped, following row still parsed
    assert_eq!( mission.waypoints[4].index, 4);
}

#[test]
fn test_empty_mission () {
    assert!( matches!( parse_wpl("QGC WPL 110"), Err(WptMissionError::EmptyMission)));
    assert!( matches!( parse_wpl("QGC WPL 110\n\n"), Err(WptMissionError::EmptyMission)));
}

#[test]
fn test_roundtrip () {
    let mission = parse_wpl(SAMPLE).unwrap();
    let out = write_wpl(&mission);
    assert_eq!( out, SAMPLE);

    // reparse of the output is value-identical
    let mission2 = parse_wpl(&out).unwrap();
    assert_eq!( mission2, mission);
}

#[test]
fn test_optional_fields () {
    // empty lat/lon/alt/autocontinue fields parse as absent and serialize back as empty
    let contents = "QGC WPL 110\n0\t0\t16\t0\t0\t0\t0\t0\t\t\t\t";
    let mission = parse_wpl(contents).unwrap();

    let wp = &mission.waypoints[0];
    assert_eq!( wp.lat, None);
    assert_eq!( wp.lon, None);
    assert_eq!( wp.alt, None);
    assert_eq!( wp.autocontinue, None);
    assert!( !wp.has_position());

    assert_eq!( write_wpl(&mission), contents);
}

#[test]
fn test_unreadable_file () {
    assert!( matches!( read_wpl_file(&"no/such/mission.waypoints"), Err(WptMissionError::IOError(_))));
}
