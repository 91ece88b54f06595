diesel::table! {
    substations (id) {
        id -> Integer,
        name -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    machines (id) {
        id -> Integer,
        substation_id -> Integer,
        position_x -> Integer,
        position_y -> Integer,
        name -> Nullable<Text>,
        info -> Nullable<Text>,
        image_path -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(machines -> substations (substation_id));

diesel::allow_tables_to_appear_in_same_query!(machines, substations);
