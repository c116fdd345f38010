//! Container files of a new project.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile};

/// Dockerfile serving `src/` with nginx.
pub struct Dockerfile;

impl GeneratedFile for Dockerfile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Dockerfile")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"FROM nginx:alpine

COPY nginx.conf /etc/nginx/conf.d/default.conf
COPY src/ /usr/share/nginx/html/

EXPOSE 80

CMD ["nginx", "-g", "daemon off;"]
"#
        .to_string()
    }
}

/// docker-compose.yml exposing the app on port 8080.
pub struct DockerCompose {
    pub service_name: String,
}

impl DockerCompose {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

impl GeneratedFile for DockerCompose {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("docker-compose.yml")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"services:
  {name}:
    build: .
    ports:
      - "8080:80"
    restart: unless-stopped
"#,
            name = self.service_name
        )
    }
}

/// nginx.conf falling back to index.html so client-side routes resolve.
pub struct NginxConf;

impl GeneratedFile for NginxConf {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("nginx.conf")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"server {
    listen 80;
    server_name localhost;
    root /usr/share/nginx/html;
    index index.html;

    location / {
        try_files $uri $uri/ /index.html;
    }

    location ~* \.(js|css|svg|png|jpg|ico)$ {
        expires 7d;
        add_header Cache-Control "public";
    }
}
"#
        .to_string()
    }
}
