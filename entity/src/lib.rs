pub mod user;

/*
 One table, one entity. A user is keyed by an opaque text id handed out by the
 service; email is unique at the storage layer and is the login handle.
 */
