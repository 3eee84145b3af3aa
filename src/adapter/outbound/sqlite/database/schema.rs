// Mirrors migrations/authors and migrations/logs.

diesel::table! {
    users (login) {
        login -> Text,
        name -> Text,
        email -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    blogs (id) {
        id -> Integer,
        owner_login -> Text,
        title -> Text,
        description -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    posts (id) {
        id -> Integer,
        blog_id -> Integer,
        author_login -> Text,
        header -> Text,
        body -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    comments (id) {
        id -> Integer,
        post_id -> Integer,
        author_login -> Text,
        body -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    actions (id) {
        id -> Integer,
        login -> Text,
        action_type -> Text,
        space -> Text,
        created_at -> Text,
    }
}

diesel::joinable!(blogs -> users (owner_login));
diesel::joinable!(comments -> posts (post_id));
diesel::joinable!(posts -> blogs (blog_id));

diesel::allow_tables_to_appear_in_same_query!(blogs, comments, posts, users);
