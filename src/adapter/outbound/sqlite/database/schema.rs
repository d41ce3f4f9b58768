// Mirrors the CREATE TABLE statements in `connection::create_tables`.

diesel::table! {
    employees (id) {
        id -> Nullable<Integer>,
        full_name -> Text,
        age -> Integer,
        department -> Text,
        title -> Text,
        status -> Text,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    requests (id) {
        id -> Nullable<Integer>,
        content -> Text,
        submitted_at -> Nullable<Timestamp>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(employees, requests);
