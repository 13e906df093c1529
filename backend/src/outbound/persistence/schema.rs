//! Diesel table definitions for the record collections.
//!
//! Kept in step with `migrations/`. Table names match the collection names
//! reported by `/schema`.

diesel::table! {
    resident (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        apartment -> Text,
        phone -> Nullable<Text>,
        role -> Text,
        share_contact -> Bool,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    maintenancerequest (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        requested_by -> Text,
        category -> Text,
        status -> Text,
        priority -> Text,
        assigned_to -> Nullable<Text>,
        apartment -> Nullable<Text>,
        images -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    payment (id) {
        id -> Uuid,
        user_email -> Text,
        amount -> Float8,
        purpose -> Text,
        month -> Nullable<Text>,
        status -> Text,
        receipt_no -> Nullable<Text>,
        remarks -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    notice (id) {
        id -> Uuid,
        title -> Text,
        body -> Text,
        posted_by -> Text,
        tags -> Array<Text>,
        attachments -> Array<Text>,
        pinned -> Bool,
        language -> Text,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    asset (id) {
        id -> Uuid,
        name -> Text,
        description -> Nullable<Text>,
        rules -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    reservation (id) {
        id -> Uuid,
        asset_name -> Text,
        start_time -> Timestamptz,
        end_time -> Timestamptz,
        requested_by -> Text,
        status -> Text,
        purpose -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    complaint (id) {
        id -> Uuid,
        message -> Text,
        anonymous -> Bool,
        user_email -> Nullable<Text>,
        status -> Text,
        response -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    document (id) {
        id -> Uuid,
        title -> Text,
        url -> Text,
        uploaded_by -> Text,
        category -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    resident,
    maintenancerequest,
    payment,
    notice,
    asset,
    reservation,
    complaint,
    document,
);
