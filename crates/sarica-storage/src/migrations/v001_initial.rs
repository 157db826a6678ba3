//! v001: essences, class_points, settings.

pub const MIGRATION_SQL: &str = "
    BEGIN;

    CREATE TABLE IF NOT EXISTS essences (
        member_id   INTEGER PRIMARY KEY,
        experience  INTEGER NOT NULL DEFAULT 0 CHECK (experience >= 0),
        level       INTEGER NOT NULL DEFAULT 0 CHECK (level BETWEEN 0 AND 244)
    );

    CREATE TABLE IF NOT EXISTS class_points (
        member_id   INTEGER NOT NULL,
        category    INTEGER NOT NULL,
        points      INTEGER NOT NULL DEFAULT 0 CHECK (points >= 0),
        PRIMARY KEY (member_id, category)
    ) WITHOUT ROWID;

    CREATE TABLE IF NOT EXISTS settings (
        key    TEXT PRIMARY KEY,
        value  TEXT NOT NULL
    );

    COMMIT;
";
