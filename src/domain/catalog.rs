//! Fixed catalog of Django libraries and the settings fragments each one contributes.

/// A pip-installable library known to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    /// Canonical package name passed to the installer.
    pub package: &'static str,
    /// Alternative identifiers accepted in `libraries`.
    pub aliases: &'static [&'static str],
    /// Offered in the interactive library question.
    pub optional: bool,
    /// Entry for `INSTALLED_APPS`.
    pub installed_app: Option<&'static str>,
    /// Entry for `MIDDLEWARE`.
    pub middleware: Option<&'static str>,
    /// Free-text settings block appended to `settings.py`.
    pub extra_settings: Option<&'static str>,
    /// Companion library installed alongside this one.
    pub linked: Option<&'static str>,
    /// Extra template rendered into the project package.
    pub linked_file: Option<&'static str>,
}

pub const DJANGO_REST_FRAMEWORK: &str = "djangorestframework";
pub const GRAPHENE_DJANGO: &str = "graphene-django";
pub const CHANNELS: &str = "django-channels";
pub const LOCALFLAVOR: &str = "django-localflavor";
pub const CELERY: &str = "celery";
pub const WHITENOISE: &str = "whitenoise";
pub const DJANGO_FILTER: &str = "django-filter";
pub const DJANGO_EXTENSIONS: &str = "django-extensions";
pub const DJANGO_STORAGES: &str = "django-storages";
pub const CORS_HEADERS: &str = "django-cors-headers";
pub const CHANNELS_REDIS: &str = "channels_redis";

const CORS_SETTINGS: &str = "# Django Cors Header Settings
CORS_ALLOWED_ORIGINS = ['http://localhost:8080', 'http://127.0.0.1:8000']";

const CHANNEL_LAYER_SETTINGS: &str = "# Add REDIS_URL To Env Variable
CHANNEL_LAYERS = {
    'default': {
        'BACKEND': 'channels_redis.core.RedisChannelLayer',
        'CONFIG': {'hosts': [os.environ.get('REDIS_URL', 'redis://localhost:6379')]},
    },
}
ASGI_APPLICATION = '$PROJECT_NAME.routing.application'";

const fn library(package: &'static str) -> Library {
    Library {
        package,
        aliases: &[],
        optional: true,
        installed_app: None,
        middleware: None,
        extra_settings: None,
        linked: None,
        linked_file: None,
    }
}

pub const LIBRARIES: &[Library] = &[
    Library {
        aliases: &["django-rest-framework", "rest_framework"],
        installed_app: Some("'rest_framework'"),
        linked: Some(CORS_HEADERS),
        ..library(DJANGO_REST_FRAMEWORK)
    },
    Library {
        aliases: &["graphene_django"],
        installed_app: Some("'graphene_django'"),
        linked: Some(CORS_HEADERS),
        ..library(GRAPHENE_DJANGO)
    },
    Library {
        aliases: &["channels"],
        installed_app: Some("'channels'"),
        extra_settings: Some(CHANNEL_LAYER_SETTINGS),
        linked: Some(CHANNELS_REDIS),
        linked_file: Some("routing"),
        ..library(CHANNELS)
    },
    library(LOCALFLAVOR),
    library(CELERY),
    library(WHITENOISE),
    Library { installed_app: Some("'django_filters'"), ..library(DJANGO_FILTER) },
    library(DJANGO_EXTENSIONS),
    Library { installed_app: Some("'storages'"), ..library(DJANGO_STORAGES) },
    Library {
        aliases: &["corsheaders"],
        optional: false,
        installed_app: Some("'corsheaders'"),
        middleware: Some("'corsheaders.middleware.CorsMiddleware'"),
        extra_settings: Some(CORS_SETTINGS),
        ..library(CORS_HEADERS)
    },
    Library { aliases: &["channels-redis"], optional: false, ..library(CHANNELS_REDIS) },
];

/// Look up a library by package name or alias (case-insensitive).
pub fn find_library(identifier: &str) -> Option<&'static Library> {
    let needle = identifier.trim().to_lowercase();
    LIBRARIES.iter().find(|lib| {
        lib.package.eq_ignore_ascii_case(&needle)
            || lib.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&needle))
    })
}

/// Canonical package name; identifiers outside the catalog are kept verbatim.
pub fn canonical_library(identifier: &str) -> String {
    match find_library(identifier) {
        Some(lib) => lib.package.to_string(),
        None => identifier.trim().to_string(),
    }
}

/// Libraries offered by the interactive question.
pub fn optional_libraries() -> impl Iterator<Item = &'static Library> {
    LIBRARIES.iter().filter(|lib| lib.optional)
}

/// A supported database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    Postgresql,
    Mysql,
    MariaDb,
    Oracle,
    Mssql,
    Sqlite3,
    Cockroachdb,
}

impl DatabaseEngine {
    pub const ALL: [DatabaseEngine; 7] = [
        DatabaseEngine::Postgresql,
        DatabaseEngine::Mysql,
        DatabaseEngine::MariaDb,
        DatabaseEngine::Oracle,
        DatabaseEngine::Mssql,
        DatabaseEngine::Sqlite3,
        DatabaseEngine::Cockroachdb,
    ];

    /// Key used in `setup.yaml`.
    pub fn key(&self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "postgresql",
            DatabaseEngine::Mysql => "mysql",
            DatabaseEngine::MariaDb => "maria_db",
            DatabaseEngine::Oracle => "oracle",
            DatabaseEngine::Mssql => "mssql",
            DatabaseEngine::Sqlite3 => "sqlite3",
            DatabaseEngine::Cockroachdb => "django_cockroachdb",
        }
    }

    /// Django `ENGINE` setting.
    pub fn django_backend(&self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "django.db.backends.postgresql",
            DatabaseEngine::Mysql | DatabaseEngine::MariaDb => "django.db.backends.mysql",
            DatabaseEngine::Oracle => "django.db.backends.oracle",
            DatabaseEngine::Mssql => "mssql",
            DatabaseEngine::Sqlite3 => "django.db.backends.sqlite3",
            DatabaseEngine::Cockroachdb => "django_cockroachdb",
        }
    }

    /// Driver package the engine needs, if any.
    pub fn driver_package(&self) -> Option<&'static str> {
        match self {
            DatabaseEngine::Postgresql => Some("psycopg2-binary"),
            DatabaseEngine::Mysql | DatabaseEngine::MariaDb => Some("mysqlclient"),
            DatabaseEngine::Oracle => Some("cx_oracle"),
            DatabaseEngine::Mssql => Some("mssql-django"),
            DatabaseEngine::Sqlite3 => None,
            DatabaseEngine::Cockroachdb => Some("django-cockroachdb"),
        }
    }

    /// Parse from a catalog key.
    pub fn from_key(value: &str) -> Option<DatabaseEngine> {
        Self::ALL.into_iter().find(|engine| engine.key() == value)
    }
}

/// A supported cache backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheBackend {
    PyMemcache,
    Redis,
    Database,
    FileBased,
    LocMem,
}

impl CacheBackend {
    pub const ALL: [CacheBackend; 5] = [
        CacheBackend::PyMemcache,
        CacheBackend::Redis,
        CacheBackend::Database,
        CacheBackend::FileBased,
        CacheBackend::LocMem,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CacheBackend::PyMemcache => "pymemcache",
            CacheBackend::Redis => "redis",
            CacheBackend::Database => "DatabaseCache",
            CacheBackend::FileBased => "FileBasedCache",
            CacheBackend::LocMem => "LocMemCache",
        }
    }

    pub fn django_backend(&self) -> &'static str {
        match self {
            CacheBackend::PyMemcache => "django.core.cache.backends.memcached.PyMemcacheCache",
            CacheBackend::Redis => "django.core.cache.backends.redis.RedisCache",
            CacheBackend::Database => "django.core.cache.backends.db.DatabaseCache",
            CacheBackend::FileBased => "django.core.cache.backends.filebased.FileBasedCache",
            CacheBackend::LocMem => "django.core.cache.backends.locmem.LocMemCache",
        }
    }

    pub fn from_key(value: &str) -> Option<CacheBackend> {
        Self::ALL.into_iter().find(|backend| backend.key() == value)
    }
}
