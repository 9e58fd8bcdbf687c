//! Helm-style chart values describing a web application deployment.
//!
//! Maps are [`BTreeMap`]s so engines iterate them in key order, and optional fields
//! serialize as `null` rather than being left out: templates can test any key
//! without tripping over undefined-variable rules.
//! Some strings carry their own double quotes, the same way they would appear in a
//! values file, so the rendered YAML keeps them as strings.

use std::collections::BTreeMap;

use serde::Serialize;

/// Root of the template context. Templates address everything through `Values`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    #[serde(rename = "Values")]
    pub values: Values,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Values {
    pub app_name: String,
    pub namespace: String,
    pub version: String,
    pub environment: String,
    pub custom_labels: BTreeMap<String, String>,
    pub replica_count: u32,
    pub image: Image,
    pub service: Service,
    pub env: Vec<EnvVar>,
    pub resources: Resources,
    pub volume_mounts: Vec<VolumeMount>,
    pub volumes: Vec<Volume>,
    pub node_selector: BTreeMap<String, String>,
    pub tolerations: Vec<Toleration>,
    pub ingress: Ingress,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub repository: String,
    pub tag: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub port: u16,
    pub target_port: u16,
    pub node_port: Option<u16>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    pub limits: ResourceAmounts,
    pub requests: ResourceAmounts,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceAmounts {
    pub cpu: String,
    pub memory: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
    pub read_only: Option<bool>,
}

/// A pod volume. Exactly one of the sources is set.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub name: String,
    pub config_map: Option<ConfigMapSource>,
    pub secret: Option<SecretSource>,
    pub persistent_volume_claim: Option<ClaimSource>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigMapSource {
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretSource {
    pub secret_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSource {
    pub claim_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Toleration {
    pub key: String,
    pub operator: String,
    pub value: String,
    pub effect: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Ingress {
    pub enabled: bool,
    pub annotations: BTreeMap<String, String>,
    pub tls: Vec<IngressTls>,
    pub hosts: Vec<IngressHost>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
    pub hosts: Vec<String>,
    pub secret_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IngressHost {
    pub host: String,
    pub paths: Vec<IngressPath>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressPath {
    pub path: String,
    pub path_type: String,
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn env_var(name: &str, value: &str) -> EnvVar {
    EnvVar {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

fn mount(name: &str, mount_path: &str, read_only: Option<bool>) -> VolumeMount {
    VolumeMount {
        name: name.to_owned(),
        mount_path: mount_path.to_owned(),
        read_only,
    }
}

fn volume(name: &str) -> Volume {
    Volume {
        name: name.to_owned(),
        config_map: None,
        secret: None,
        persistent_volume_claim: None,
    }
}

fn toleration(key: &str, value: &str, effect: &str) -> Toleration {
    Toleration {
        key: format!("\"{key}\""),
        operator: "\"Equal\"".to_owned(),
        value: format!("\"{value}\""),
        effect: format!("\"{effect}\""),
    }
}

fn prefix_path(path: &str) -> IngressPath {
    IngressPath {
        path: path.to_owned(),
        path_type: "Prefix".to_owned(),
    }
}

/// The production deployment of `my-web-app`.
#[must_use]
pub fn chart() -> Chart {
    let values = Values {
        app_name: "my-web-app".to_owned(),
        namespace: "production".to_owned(),
        version: "\"1.2.3\"".to_owned(),
        environment: "prod".to_owned(),
        custom_labels: string_map(&[
            ("team", "backend"),
            ("cost-center", "engineering"),
            ("project", "web-platform"),
        ]),
        replica_count: 5,
        image: Image {
            repository: "myregistry.com/my-web-app".to_owned(),
            tag: "v1.2.3".to_owned(),
        },
        service: Service {
            enabled: true,
            kind: "LoadBalancer".to_owned(),
            port: 80,
            target_port: 8080,
            node_port: Some(30080),
        },
        env: vec![
            env_var("DATABASE_URL", "postgresql://db.example.com:5432/myapp"),
            env_var("REDIS_HOST", "redis.example.com"),
            env_var("LOG_LEVEL", "info"),
            env_var("API_KEY", "secret-api-key-123"),
        ],
        resources: Resources {
            limits: ResourceAmounts {
                cpu: "\"1000m\"".to_owned(),
                memory: "\"1Gi\"".to_owned(),
            },
            requests: ResourceAmounts {
                cpu: "\"500m\"".to_owned(),
                memory: "\"512Mi\"".to_owned(),
            },
        },
        volume_mounts: vec![
            mount("config-volume", "/etc/config", Some(true)),
            mount("secret-volume", "/etc/secrets", Some(true)),
            mount("data-volume", "/var/data", None),
        ],
        volumes: vec![
            Volume {
                config_map: Some(ConfigMapSource {
                    name: "my-web-app-config".to_owned(),
                }),
                ..volume("config-volume")
            },
            Volume {
                secret: Some(SecretSource {
                    secret_name: "my-web-app-secrets".to_owned(),
                }),
                ..volume("secret-volume")
            },
            Volume {
                persistent_volume_claim: Some(ClaimSource {
                    claim_name: "my-web-app-data".to_owned(),
                }),
                ..volume("data-volume")
            },
        ],
        node_selector: string_map(&[
            ("kubernetes.io/os", "linux"),
            ("node-type", "web-tier"),
        ]),
        tolerations: vec![
            toleration("node-type", "web-tier", "NoSchedule"),
            toleration("dedicated", "web-app", "NoExecute"),
        ],
        ingress: Ingress {
            enabled: true,
            annotations: string_map(&[
                ("kubernetes.io/ingress.class", "nginx"),
                ("cert-manager.io/cluster-issuer", "letsencrypt-prod"),
                ("nginx.ingress.kubernetes.io/rewrite-target", "/"),
            ]),
            tls: vec![IngressTls {
                hosts: vec![
                    "myapp.example.com".to_owned(),
                    "api.myapp.example.com".to_owned(),
                ],
                secret_name: "myapp-tls-cert".to_owned(),
            }],
            hosts: vec![
                IngressHost {
                    host: "myapp.example.com".to_owned(),
                    paths: vec![prefix_path("/"), prefix_path("/api")],
                },
                IngressHost {
                    host: "api.myapp.example.com".to_owned(),
                    paths: vec![prefix_path("/")],
                },
            ],
        },
    };
    Chart { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_keys() {
        let value = serde_json::to_value(chart()).unwrap();
        let values = &value["Values"];
        assert_eq!(values["appName"], "my-web-app");
        assert_eq!(values["replicaCount"], 5);
        assert_eq!(values["service"]["type"], "LoadBalancer");
        assert_eq!(values["service"]["targetPort"], 8080);
        assert_eq!(values["volumeMounts"][0]["mountPath"], "/etc/config");
        assert_eq!(values["ingress"]["tls"][0]["secretName"], "myapp-tls-cert");
        assert_eq!(values["ingress"]["hosts"][0]["paths"][1]["pathType"], "Prefix");
    }

    #[test]
    fn optional_fields_are_null() {
        let value = serde_json::to_value(chart()).unwrap();
        let values = &value["Values"];
        assert!(values["volumeMounts"][2]["readOnly"].is_null());
        assert!(values["volumeMounts"][2].as_object().unwrap().contains_key("readOnly"));
        let secret_volume = values["volumes"][1].as_object().unwrap();
        assert!(secret_volume["configMap"].is_null());
        assert!(secret_volume["persistentVolumeClaim"].is_null());
        assert_eq!(secret_volume["secret"]["secretName"], "my-web-app-secrets");
    }

    #[test]
    fn maps_iterate_in_key_order() {
        let values = chart().values;
        let labels: Vec<&str> = values.custom_labels.keys().map(String::as_str).collect();
        assert_eq!(labels, ["cost-center", "project", "team"]);
        let annotations: Vec<&str> = values.ingress.annotations.keys().map(String::as_str).collect();
        assert_eq!(
            annotations,
            [
                "cert-manager.io/cluster-issuer",
                "kubernetes.io/ingress.class",
                "nginx.ingress.kubernetes.io/rewrite-target"
            ]
        );
    }

    #[test]
    fn quoted_values_keep_their_quotes() {
        let values = chart().values;
        assert_eq!(values.version, "\"1.2.3\"");
        assert_eq!(values.tolerations[1].effect, "\"NoExecute\"");
        assert_eq!(values.resources.requests.memory, "\"512Mi\"");
    }
}
