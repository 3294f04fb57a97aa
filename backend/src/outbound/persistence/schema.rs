//! Diesel table definitions for the save date store.
//!
//! Kept in step with `backend/migrations` by hand. `seq` is assigned by the
//! database on insert and only used for ordering, so no row struct maps it.

diesel::table! {
    save_dates (id) {
        id -> Uuid,
        seq -> Int8,
        title -> Text,
        event_subtitle -> Nullable<Text>,
        event_summary -> Text,
        event_times -> Jsonb,
        event_venue -> Text,
        event_address -> Text,
        event_city -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
