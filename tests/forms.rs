use uuid::Uuid;

use avicor_client::domain::empleado::CreateEmpleado;
use avicor_client::domain::proveedor::CreateProveedor;
use avicor_client::forms::empleado::EmpleadoRegisterForm;
use avicor_client::forms::marca::MarcaRegisterForm;
use avicor_client::forms::proveedor::ProveedorRegisterForm;
use avicor_client::forms::unidad_medida::UnidadMedidaRegisterForm;
use avicor_client::forms::usuario::UsuarioForm;

fn valid_usuario_form() -> UsuarioForm {
    UsuarioForm {
        rol_id: Uuid::new_v4().to_string(),
        name_user: "mflores".into(),
        email: "mflores@example.com".into(),
        password: "Secreta123".into(),
    }
}

fn valid_empleado_form() -> EmpleadoRegisterForm {
    EmpleadoRegisterForm {
        ci: "1234567".into(),
        nombre: "Maria".into(),
        apellido_paterno: "Flores".into(),
        apellido_materno: "Quispe".into(),
        cargo: "Vendedora".into(),
        fecha_nacimiento: "15-03-1990".into(),
        fecha_contratacion: "01-02-2024".into(),
        salario_base: 3500.0,
        telefono: "70012345".into(),
        direccion: "Av. Siempre Viva 123".into(),
        usuario: valid_usuario_form(),
    }
}

#[test]
fn valid_empleado_form_passes() {
    assert_eq!(valid_empleado_form().validate(), Ok(()));
}

#[test]
fn missing_telefono_fails_with_a_field_specific_message() {
    let mut form = valid_empleado_form();
    form.telefono = String::new();

    let errors = form.validate().unwrap_err();

    assert!(
        errors
            .iter()
            .any(|e| e.field == "telefono" && e.message == "Teléfono inválido")
    );
}

#[test]
fn six_character_phone_fails() {
    let mut form = valid_empleado_form();
    form.telefono = "123456".into();

    let errors = form.validate().unwrap_err();

    assert!(errors.iter().any(|e| e.field == "telefono"));
}

#[test]
fn bad_date_format_fails() {
    let mut form = valid_empleado_form();
    form.fecha_nacimiento = "1990-03-15".into();

    let errors = form.validate().unwrap_err();

    assert!(errors.iter().any(
        |e| e.field == "fecha_nacimiento" && e.message == "Formato de fecha inválido (DD-MM-YYYY)"
    ));
}

#[test]
fn nonpositive_salary_fails() {
    let mut form = valid_empleado_form();
    form.salario_base = 0.0;

    let errors = form.validate().unwrap_err();

    assert!(
        errors
            .iter()
            .any(|e| e.field == "salario_base" && e.message == "El salario debe ser mayor a 0")
    );
}

#[test]
fn nested_account_errors_are_prefixed() {
    let mut form = valid_empleado_form();
    form.usuario.password = "short".into();

    let errors = form.validate().unwrap_err();

    assert!(errors.iter().any(|e| e.field == "usuario.password"));
}

#[test]
fn failures_keep_rule_evaluation_order() {
    let mut form = valid_empleado_form();
    form.ci = "123".into();
    form.telefono = String::new();

    let errors = form.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(fields, vec!["ci", "telefono"]);
}

#[test]
fn weak_passwords_collect_every_failed_rule() {
    let mut form = valid_usuario_form();
    form.password = "minuscula".into();

    let errors = form.validate().unwrap_err();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![
            "Debe contener al menos una letra mayúscula",
            "Debe contener al menos un número",
        ]
    );
}

#[test]
fn empleado_form_converts_into_create_dto() {
    let form = valid_empleado_form();

    let dto = CreateEmpleado::try_from(&form).unwrap();

    assert_eq!(dto.ci, "1234567");
    assert_eq!(dto.salario_base, 3500.0);
    let usuario = dto.usuario.unwrap();
    assert_eq!(usuario.rol_id.to_string(), form.usuario.rol_id);
}

#[test]
fn proveedor_zona_must_be_a_uuid() {
    let form = ProveedorRegisterForm {
        nombre: "Juan".into(),
        apellido_paterno: "Mamani".into(),
        apellido_materno: "Condori".into(),
        empresa: "Avicola Oriente".into(),
        zona_id: "not-a-uuid".into(),
        telefono: "70123456".into(),
        direccion: "Calle Falsa 742".into(),
    };

    let errors = form.validate().unwrap_err();

    assert!(
        errors
            .iter()
            .any(|e| e.field == "zona_id" && e.message == "La zona debe ser un UUID válido")
    );
    assert!(CreateProveedor::try_from(&form).is_err());
}

#[test]
fn marca_description_is_optional_but_bounded() {
    let short = MarcaRegisterForm {
        nombre: "Sofia".into(),
        descripcion: None,
    };
    assert_eq!(short.validate(), Ok(()));

    let long = MarcaRegisterForm {
        nombre: "Sofia".into(),
        descripcion: Some("x".repeat(1001)),
    };
    let errors = long.validate().unwrap_err();
    assert!(errors.iter().any(|e| e.field == "descripcion"));
}

#[test]
fn unidad_medida_requires_an_abbreviation() {
    let form = UnidadMedidaRegisterForm {
        nombre: "Kilogramo".into(),
        abreviatura: String::new(),
    };

    let errors = form.validate().unwrap_err();

    assert!(
        errors
            .iter()
            .any(|e| e.field == "abreviatura" && e.message == "La abreviatura es requerida.")
    );
}
