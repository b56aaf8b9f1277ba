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

use wpt_common::cartesian2::Cartesian2;
use wpt_common::geo::GeoPoint;
use wpt_common::utm::{geo_to_utm_zone, naive_utm_zone};
use wpt_mission::{
    align_origin, load_config, mirror_offset, Mission, MirrorOffsetParams, MirrorRules,
    TaskParams, TaskSchedule, Waypoint, WptMissionError
};

/// unit tests for the mission transforms
/// run with "cargo test -p wpt_mission --test test_transform -- --nocapture"

// projection roundtrip tolerance of planar comparisons (the series pair is sub-mm accurate)
const PLANAR_EPS: f64 = 1e-2;

fn wp (index: u32, lat: f64, lon: f64, alt: f64) -> Waypoint {
    Waypoint {
        index,
        frame: 3,
        command: 16,
        param0: 0, param1: 0, param2: 0, param3: 0, param4: 0,
        lat: Some(lat),
        lon: Some(lon),
        alt: Some(alt),
        autocontinue: Some(1),
    }
}

fn test_mission () -> Mission {
    Mission {
        waypoints: vec![
            wp( 0, 0.0, 0.0, 0.0),              // home row, no georeference
            wp( 1, 39.0002, 116.0002, 5.0),
            wp( 2, 39.0003, 116.0003, 5.0),
            wp( 3, 39.0,    116.0,    5.0),     // mirror line anchor / offset source for 6
            wp( 4, 39.0001, 116.0001, 5.0),     // mirror line anchor / offset source for 5
            wp( 5, 39.001,  116.001,  5.0),     // adopts the moved position of 4
            wp( 6, 39.002,  116.002,  5.0),     // adopts the moved position of 3
            wp( 7, 39.0005, 116.0005, 5.0),
            wp( 8, 39.0006, 116.0006, 3.25),    // outside both altitude bands
        ]
    }
}

fn planar_of (wp: &Waypoint, zone: wpt_common::utm::UtmZone) -> Cartesian2 {
    geo_to_utm_zone( &wp.position().unwrap(), zone).unwrap().as_cartesian2()
}

#[test]
fn test_mirror_offset_scenario () {
    let mission = test_mission();
    let params = MirrorOffsetParams { dx: 4.0, dy: -0.5, alt1: 6.0, alt2: 6.5 };
    let rules = MirrorRules::default();

    let result = mirror_offset( &mission, &params, &rules).unwrap();

    // same length, order and passthrough fields
    assert_eq!( result.len(), mission.len());
    for (a,b) in mission.waypoints.iter().zip( result.waypoints.iter()) {
        assert_eq!( a.index, b.index);
        assert_eq!( a.frame, b.frame);
        assert_eq!( a.command, b.command);
        assert_eq!( a.autocontinue, b.autocontinue);
    }

    let zone = naive_utm_zone( &mission.waypoints[4].position().unwrap());
    let offset = Cartesian2::new( params.dx, params.dy);

    // waypoint 5 landed on the offset-translated position of waypoint 4, 6 on that of 3
    let expected5 = planar_of( &mission.waypoints[4], zone) + offset;
    let expected6 = planar_of( &mission.waypoints[3], zone) + offset;
    assert!( planar_of( &result.waypoints[5], zone).distance_to( &expected5) < PLANAR_EPS);
    assert!( planar_of( &result.waypoints[6], zone).distance_to( &expected6) < PLANAR_EPS);

    // all other positions are bit-identical to the input
    for i in [1usize,2,3,4,7,8] {
        assert_eq!( result.waypoints[i].lat, mission.waypoints[i].lat, "position of index {i} changed");
        assert_eq!( result.waypoints[i].lon, mission.waypoints[i].lon, "position of index {i} changed");
    }

    // sentinel row position untouched, but still altitude-banded
    assert_eq!( result.waypoints[0].lat, Some(0.0));
    assert_eq!( result.waypoints[0].lon, Some(0.0));

    // altitude bands: 0..=4 -> alt1, 5..=7 -> alt2, others keep theirs
    for i in 0..=4 { assert_eq!( result.waypoints[i].alt, Some(6.0), "alt1 band broken at {i}") }
    for i in 5..=7 { assert_eq!( result.waypoints[i].alt, Some(6.5), "alt2 band broken at {i}") }
    assert_eq!( result.waypoints[8].alt, Some(3.25));
}

#[test]
fn test_mirror_missing_anchor () {
    let mut mission = test_mission();
    mission.waypoints.retain( |wp| wp.index != 4);

    let params = MirrorOffsetParams { dx: 1.0, dy: 1.0, alt1: 6.0, alt2: 6.5 };
    let result = mirror_offset( &mission, &params, &MirrorRules::default());
    assert!( matches!( result, Err(WptMissionError::MissingReference(4))));
}

#[test]
fn test_mirror_anchor_without_position () {
    let mut mission = test_mission();
    mission.waypoints[3].lat = Some(0.0);
    mission.waypoints[3].lon = Some(0.0);

    let params = MirrorOffsetParams { dx: 1.0, dy: 1.0, alt1: 6.0, alt2: 6.5 };
    let result = mirror_offset( &mission, &params, &MirrorRules::default());
    assert!( matches!( result, Err(WptMissionError::MissingReference(3))));
}

#[test]
fn test_mirror_degenerate_line () {
    let mut mission = test_mission();
    mission.waypoints[3].lat = Some(39.0001);
    mission.waypoints[3].lon = Some(116.0001); // same as anchor 4

    let params = MirrorOffsetParams { dx: 1.0, dy: 1.0, alt1: 6.0, alt2: 6.5 };
    let result = mirror_offset( &mission, &params, &MirrorRules::default());
    assert!( matches!( result, Err(WptMissionError::DegenerateLine)));
}

#[test]
fn test_align_origin () {
    let mission = test_mission();
    let current = GeoPoint::from_lon_lat_degrees( 116.0015, 39.0012);

    let result = align_origin( &mission, current, 5.5, &MirrorRules::default()).unwrap();
    assert_eq!( result.len(), mission.len());

    let zone = naive_utm_zone( &mission.waypoints[3].position().unwrap());
    let p_cur = geo_to_utm_zone( &current, zone).unwrap().as_cartesian2();
    let p_ref = planar_of( &mission.waypoints[3], zone);
    let delta = p_cur - p_ref;

    // the former reference waypoint now coincides with the current position
    assert!( planar_of( &result.waypoints[3], zone).distance_to( &p_cur) < PLANAR_EPS);

    // every georeferenced waypoint shifted by the identical delta
    for i in 1..mission.len() {
        let shifted = planar_of( &mission.waypoints[i], zone) + delta;
        assert!( planar_of( &result.waypoints[i], zone).distance_to( &shifted) < PLANAR_EPS,
                 "non-uniform translation at index {i}");
    }

    // sentinel row position untouched, single altitude everywhere (sentinel included)
    assert_eq!( result.waypoints[0].lat, Some(0.0));
    assert_eq!( result.waypoints[0].lon, Some(0.0));
    for wp in &result.waypoints {
        assert_eq!( wp.alt, Some(5.5));
    }
}

#[test]
fn test_align_checks_both_anchors () {
    let mut mission = test_mission();
    mission.waypoints.retain( |wp| wp.index != 4); // index 4 is unused by the translation but still required

    let result = align_origin( &mission, GeoPoint::from_lon_lat_degrees(116.0, 39.0), 5.5, &MirrorRules::default());
    assert!( matches!( result, Err(WptMissionError::MissingReference(4))));
}

#[test]
fn test_task_schedule () {
    let schedule = TaskSchedule {
        alt1: 6.0,
        cal_dx: 0.03,
        cal_dy: 0.36,
        tasks: vec![
            TaskParams { dx: 4.0, dy: -0.5, alt2: 4.5 },
            TaskParams { dx: 5.0, dy:  0.0, alt2: 5.5 },
            TaskParams { dx: 6.0, dy:  0.5, alt2: 6.5 },
        ],
    };

    let p = schedule.params_for_task( 3, false).unwrap();
    assert_eq!( (p.dx, p.dy, p.alt1, p.alt2), (6.0, 0.5, 6.0, 6.5));

    let p = schedule.params_for_task( 1, true).unwrap();
    assert!( (p.dx - 4.03).abs() < 1e-12);
    assert!( (p.dy + 0.14).abs() < 1e-12);

    assert!( schedule.params_for_task( 0, false).is_err());
    assert!( schedule.params_for_task( 4, false).is_err());
}

#[test]
fn test_load_schedule_config () {
    let schedule: TaskSchedule = load_config( "configs/mirror_tasks.ron").unwrap();
    assert_eq!( schedule.tasks.len(), 16);
    assert_eq!( schedule.alt1, 6.0);

    let p = schedule.params_for_task( 1, false).unwrap();
    assert_eq!( (p.dx, p.dy, p.alt2), (4.0, -0.5, 4.5));
}
