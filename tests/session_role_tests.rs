use rschoolcal::calendar::{CalendarSession, DayClick, HourWindow, ViewMode, WeekStart};
use rschoolcal::core::add::AddLogic;
use rschoolcal::core::del::DeleteLogic;
use rschoolcal::core::edit::EditLogic;
use rschoolcal::core::import::ImportLogic;
use rschoolcal::core::info::StoreStats;
use rschoolcal::core::list::ListLogic;
use rschoolcal::core::log::LogLogic;
use rschoolcal::core::view::ViewLogic;
use rschoolcal::db::initialize::ensure_log_table;
use rschoolcal::db::log::{AuditLog, ttlog};
use rschoolcal::db::pool::DbPool;
use rschoolcal::errors::AppError;
use rschoolcal::models::{Capabilities, EventPatch, EventType, Notification, Role};
use rschoolcal::store::{EventStore, MemoryRepository};
use std::io::Cursor;

mod common;
use common::{d, draft, dt, event};

#[test]
fn test_role_capabilities() {
    for role in [Role::Parent, Role::Student] {
        assert_eq!(role.capabilities(), Capabilities::READ_ONLY);
    }
    for role in [
        Role::Admin,
        Role::SuperAdmin,
        Role::AdmissionStaff,
        Role::Receptionist,
        Role::Hr,
        Role::Teacher,
    ] {
        assert_eq!(role.capabilities(), Capabilities::EDITABLE);
    }

    let session = CalendarSession::new(d(2025, 11, 12), ViewMode::Month, WeekStart::Sunday, Role::Student);
    assert!(!session.capabilities().can_create);
}

#[test]
fn test_read_only_roles_cannot_mutate() {
    let mut store = EventStore::open(MemoryRepository::with_events(vec![event(
        "abcd-1",
        "Assembly",
        "2025-11-12 08:00",
        "2025-11-12 08:30",
    )]));
    let audit = AuditLog::disabled();

    let err = AddLogic::apply(
        &mut store,
        &audit,
        Role::Parent,
        draft("Party", "2025-11-12 15:00", "2025-11-12 16:00"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied { .. }));
    assert!(err.to_string().contains("not allowed"));

    let patch = EventPatch {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    assert!(EditLogic::apply(&mut store, &audit, Role::Student, "abcd-1", &patch).is_err());
    assert!(DeleteLogic::apply(&mut store, &audit, Role::Student, "abcd-1").is_err());

    assert_eq!(store.len(), 1);
    assert_eq!(store.repository().save_count(), 0);
}

#[test]
fn test_editing_roles_mutate_through_prefixes() {
    let mut store = EventStore::open(MemoryRepository::new());
    let audit = AuditLog::disabled();

    let ev = AddLogic::apply(
        &mut store,
        &audit,
        Role::Teacher,
        draft("Maths test", "2025-11-12 09:00", "2025-11-12 10:00"),
    )
    .unwrap();

    let prefix: String = ev.id.chars().take(8).collect();
    let patch = EventPatch {
        notification: Some(Notification::Day1),
        ..Default::default()
    };
    let updated = EditLogic::apply(&mut store, &audit, Role::Teacher, &prefix, &patch).unwrap();
    assert_eq!(updated.notification, Notification::Day1);

    let missing = EditLogic::apply(&mut store, &audit, Role::Teacher, "ffffffff", &patch);
    assert!(matches!(missing, Err(AppError::EventNotFound(_))));

    let removed = DeleteLogic::apply(&mut store, &audit, Role::Hr, &prefix).unwrap();
    assert_eq!(removed.id, ev.id);
    assert!(store.is_empty());
}

#[test]
fn test_click_day_opens_day_view() {
    let events = vec![event("e1", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30")];
    let mut session = CalendarSession::new(d(2025, 11, 1), ViewMode::Month, WeekStart::Sunday, Role::Admin);

    assert_eq!(session.click_day(d(2025, 11, 13), &events), DayClick::Ignored);
    assert_eq!(session.mode(), ViewMode::Month);
    assert_eq!(session.anchor(), d(2025, 11, 1));

    assert_eq!(
        session.click_day(d(2025, 11, 12), &events),
        DayClick::OpenedDay(d(2025, 11, 12))
    );
    assert_eq!(session.mode(), ViewMode::Day);
    assert_eq!(session.anchor(), d(2025, 11, 12));
    assert_eq!(session.cells(), vec![d(2025, 11, 12)]);
}

#[test]
fn test_click_event() {
    let events = vec![event("e1", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30")];
    let session = CalendarSession::new(d(2025, 11, 12), ViewMode::Week, WeekStart::Sunday, Role::Parent);

    assert_eq!(session.click_event("e1", &events).map(|e| e.title.as_str()), Some("Staff meeting"));
    assert!(session.click_event("e2", &events).is_none());
}

#[test]
fn test_session_navigation_and_titles() {
    let mut session = CalendarSession::new(d(2025, 11, 12), ViewMode::Month, WeekStart::Sunday, Role::Admin);
    assert_eq!(session.title(), "November 2025");

    session.go_next();
    assert_eq!(session.title(), "December 2025");
    session.shift(-2);
    assert_eq!(session.title(), "October 2025");

    session.set_mode(ViewMode::Week);
    session.go_today(d(2025, 11, 12));
    assert_eq!(session.bounds(), (d(2025, 11, 9), d(2025, 11, 15)));
    assert_eq!(session.title(), "Week 2025-11-09 - 2025-11-15");
}

#[test]
fn test_view_render_month_and_day() {
    let events = vec![event("e1", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30")];
    let window = HourWindow::default();

    let month = CalendarSession::new(d(2025, 11, 12), ViewMode::Month, WeekStart::Sunday, Role::Admin);
    let out = ViewLogic::render(&month, &events, window, 3, d(2025, 11, 12));
    assert!(out.contains("November 2025"));
    assert!(out.contains("Children's Day"));
    assert!(out.contains("09:30 Staff"));

    let day = CalendarSession::new(d(2025, 11, 12), ViewMode::Day, WeekStart::Sunday, Role::Admin);
    let out = ViewLogic::render(&day, &events, window, 3, d(2025, 11, 12));
    assert!(out.contains("Staff meeting (09:30-10:30)"));

    let year = CalendarSession::new(d(2025, 11, 12), ViewMode::Year, WeekStart::Monday, Role::Admin);
    let out = ViewLogic::render(&year, &events, window, 3, d(2025, 11, 12));
    assert!(out.contains("2025"));
    assert!(out.contains("January"));
}

#[test]
fn test_list_selection() {
    let events = vec![
        event("b", "Club", "2025-11-20 15:00", "2025-11-20 16:00"),
        event("a", "Assembly", "2025-11-03 08:00", "2025-11-03 08:30"),
        event("c", "New term", "2026-01-05 08:00", "2026-01-05 09:00"),
    ];
    let mut events = events;
    events[0].event_type = EventType::Task;

    let nov = ListLogic::select(&events, Some((d(2025, 11, 1), d(2025, 11, 30))), None);
    let ids: Vec<&str> = nov.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let tasks = ListLogic::select(&events, None, Some(EventType::Task));
    assert_eq!(tasks.len(), 1);

    let table = ListLogic::table(&nov).render();
    assert!(table.contains("TITLE"));
    assert!(table.contains("Assembly"));
}

#[test]
fn test_import_parse_with_aliases() {
    let csv = "\
Subject,Start Date,End Date,Category,Venue,All Day
Staff meeting,2025-11-12 09:30,2025-11-12 10:30,meeting,Room 4,
Sports day,2025-11-20,,holiday,,yes
,2025-11-21 10:00,,,,
Broken date,not a date,,,,
";

    let (drafts, skipped) = ImportLogic::parse(Cursor::new(csv)).unwrap();

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].title, "Staff meeting");
    assert_eq!(drafts[0].start, dt("2025-11-12 09:30"));
    assert_eq!(drafts[0].end, dt("2025-11-12 10:30"));
    assert_eq!(drafts[0].event_type, EventType::Meeting);
    assert_eq!(drafts[0].location, "Room 4");
    assert!(!drafts[0].all_day);

    assert!(drafts[1].all_day);
    assert_eq!(drafts[1].event_type, EventType::Holiday);

    let lines: Vec<usize> = skipped.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![4, 5]);
}

#[test]
fn test_import_parse_date_and_time_columns() {
    let csv = "name,day,time\nPTA,2025-11-21,16:00\n";

    let (drafts, skipped) = ImportLogic::parse(Cursor::new(csv)).unwrap();

    assert!(skipped.is_empty());
    assert_eq!(drafts[0].start, dt("2025-11-21 16:00"));
    assert!(!drafts[0].all_day);
}

#[test]
fn test_import_skips_rows_with_bad_end() {
    let csv = "\
title,start,end
Inverted,2025-11-12 10:00,2025-11-12 09:00
Garbled,2025-11-12 10:00,soon
Fine,2025-11-12 10:00,2025-11-12 11:00
";

    let (drafts, skipped) = ImportLogic::parse(Cursor::new(csv)).unwrap();

    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Fine");
    let lines: Vec<usize> = skipped.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![2, 3]);
    assert!(skipped[0].1.contains("before start"));
}

#[test]
fn test_import_requires_title_and_start_columns() {
    let no_title = ImportLogic::parse(Cursor::new("start,location\n2025-11-12,Hall\n"));
    assert!(matches!(no_title, Err(AppError::Import(_))));

    let no_start = ImportLogic::parse(Cursor::new("title,location\nAssembly,Hall\n"));
    assert!(matches!(no_start, Err(AppError::Import(_))));
}

#[test]
fn test_store_stats() {
    let mut events = vec![
        event("a", "Assembly", "2025-11-03 08:00", "2025-11-03 08:30"),
        event("b", "Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30"),
        event("c", "Sports day", "2025-11-13 00:00", "2025-11-13 00:00"),
    ];
    events[1].event_type = EventType::Meeting;
    events[2].all_day = true;

    let stats = StoreStats::compute(&events);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.all_day, 1);
    assert_eq!(stats.first, Some(d(2025, 11, 3)));
    assert_eq!(stats.last, Some(d(2025, 11, 13)));
    assert!(stats.per_type.contains(&(EventType::Meeting, 1)));
    assert!(stats.per_type.contains(&(EventType::Other, 2)));
    assert!(stats.per_type.contains(&(EventType::Task, 0)));
    assert!((stats.average_per_day().unwrap() - 0.3).abs() < 1e-9);

    let empty = StoreStats::compute(&[]);
    assert_eq!(empty.total, 0);
    assert_eq!(empty.average_per_day(), None);
}

#[test]
fn test_audit_log_entries() {
    let pool = DbPool::in_memory().unwrap();
    ensure_log_table(&pool.conn).unwrap();

    ttlog(&pool.conn, "add", "abcd-1", "Assembly on 2025-11-03").unwrap();
    ttlog(&pool.conn, "del", "abcd-1", "Assembly on 2025-11-03").unwrap();

    let entries = LogLogic::entries(&pool).unwrap();
    assert_eq!(entries.len(), 2);
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert!(ops.contains(&"add"));
    assert!(ops.contains(&"del"));
    assert!(entries.iter().all(|e| e.target == "abcd-1"));
}
