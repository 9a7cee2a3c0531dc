//! Literal catalog entries
//!
//! Text is in Spanish, as published on the site.

use super::CellValue::{Float as F, Int as I, Text as T};
use super::{ContentRecord, EncoderVariant, Row};

/// Sample data shared by every tab
const INITIAL_DATA: &[Row] = &[
    &[("id", I(1)), ("color", T("Rojo")), ("talla", T("M")), ("precio", F(15.50))],
    &[("id", I(2)), ("color", T("Verde")), ("talla", T("L")), ("precio", F(20.00))],
    &[("id", I(3)), ("color", T("Azul")), ("talla", T("M")), ("precio", F(17.25))],
    &[("id", I(4)), ("color", T("Rojo")), ("talla", T("S")), ("precio", F(12.00))],
];

// ============================================================================
// LabelEncoder
// ============================================================================

pub(super) static LABEL_ENCODER: ContentRecord = ContentRecord {
    variant: EncoderVariant::LabelEncoder,
    nav_title: "LabelEncoder",
    title: "sklearn.preprocessing.LabelEncoder",
    description: "Convierte cada etiqueta de texto en un número entero único. Por ejemplo, \"Rojo\" podría ser 0, \"Verde\" 1 y \"Azul\" 2. Es simple, pero puede ser problemático para algoritmos que interpretan estos números como un orden o jerarquía.",
    code: r#"import pandas as pd
from sklearn.preprocessing import LabelEncoder

# Creamos el DataFrame
df = pd.DataFrame({
    'color': ['Rojo', 'Verde', 'Azul', 'Rojo'],
    'talla': ['M', 'L', 'M', 'S']
})

# Inicializamos el codificador
le_color = LabelEncoder()
le_talla = LabelEncoder()

# Aplicamos el codificador a cada columna
df['color_encoded'] = le_color.fit_transform(df['color'])
df['talla_encoded'] = le_talla.fit_transform(df['talla'])

print(df[['color_encoded', 'talla_encoded']])
"#,
    pros: &[
        "Simple y rápido de implementar.",
        "Requiere menos memoria que One-Hot Encoding.",
    ],
    cons: &[
        "Introduce una relación ordinal artificial (ej: Azul(2) > Verde(1)) que puede confundir al modelo.",
        "No es adecuado para características nominales (categorías sin orden).",
    ],
    original_rows: INITIAL_DATA,
    transformed_rows: &[
        &[("id", I(1)), ("color", I(1)), ("talla", I(1)), ("precio", F(15.50))],
        &[("id", I(2)), ("color", I(2)), ("talla", I(0)), ("precio", F(20.00))],
        &[("id", I(3)), ("color", I(0)), ("talla", I(1)), ("precio", F(17.25))],
        &[("id", I(4)), ("color", I(1)), ("talla", I(2)), ("precio", F(12.00))],
    ],
    transformed_headers: &["id", "color", "talla", "precio"],
    note: Some("\"Azul\" se convierte en 0, \"Rojo\" en 1, \"Verde\" en 2. \"L\" se convierte en 0, \"M\" en 1, \"S\" en 2. El orden es alfabético."),
    forced_highlights: &["color", "talla"],
};

// ============================================================================
// pd.get_dummies
// ============================================================================

pub(super) static GET_DUMMIES: ContentRecord = ContentRecord {
    variant: EncoderVariant::GetDummies,
    nav_title: "pd.get_dummies",
    title: "pandas.get_dummies",
    description: "Crea nuevas columnas binarias (con valores 0 o 1) para cada categoría presente en una columna. Si una fila pertenece a una categoría, el valor en esa nueva columna será 1, y 0 en las demás. Es la forma más común y segura de codificar características nominales.",
    code: r#"import pandas as pd

# Creamos el DataFrame
df = pd.DataFrame({
    'color': ['Rojo', 'Verde', 'Azul', 'Rojo'],
    'talla': ['M', 'L', 'M', 'S'],
    'precio': [15.50, 20.00, 17.25, 12.00]
})

# Aplicamos get_dummies
df_dummies = pd.get_dummies(df, columns=['color', 'talla'], prefix=['color', 'talla'])

print(df_dummies)
"#,
    pros: &[
        "No crea relaciones ordinales falsas.",
        "Muy fácil de usar y entender con Pandas.",
        "Representación clara de la presencia o ausencia de una categoría.",
    ],
    cons: &[
        "Puede crear muchas columnas nuevas si hay muchas categorías (alta dimensionalidad).",
        "Problemas si en los datos de test aparecen categorías no vistas en el entrenamiento.",
    ],
    original_rows: INITIAL_DATA,
    transformed_rows: &[
        &[("id", I(1)), ("precio", F(15.50)), ("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("id", I(2)), ("precio", F(20.00)), ("color_Azul", I(0)), ("color_Rojo", I(0)), ("color_Verde", I(1)), ("talla_L", I(1)), ("talla_M", I(0)), ("talla_S", I(0))],
        &[("id", I(3)), ("precio", F(17.25)), ("color_Azul", I(1)), ("color_Rojo", I(0)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("id", I(4)), ("precio", F(12.00)), ("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(0)), ("talla_S", I(1))],
    ],
    transformed_headers: &["id", "precio", "color_Azul", "color_Rojo", "color_Verde", "talla_L", "talla_M", "talla_S"],
    note: None,
    forced_highlights: &[],
};

// ============================================================================
// OneHotEncoder
// ============================================================================

pub(super) static ONE_HOT_ENCODER: ContentRecord = ContentRecord {
    variant: EncoderVariant::OneHotEncoder,
    nav_title: "OneHotEncoder",
    title: "sklearn.preprocessing.OneHotEncoder",
    description: "Funcionalmente similar a `pd.get_dummies`, pero forma parte del ecosistema de Scikit-learn, lo que lo hace ideal para ser incluido en Pipelines de Machine Learning. Ofrece más control, como la capacidad de manejar categorías desconocidas que puedan aparecer en el futuro.",
    code: r#"import pandas as pd
from sklearn.preprocessing import OneHotEncoder

df = pd.DataFrame({
    'color': ['Rojo', 'Verde', 'Azul', 'Rojo'],
    'talla': ['M', 'L', 'M', 'S']
})

# Inicializamos el codificador
ohe = OneHotEncoder(sparse_output=False)

# Aplicamos y creamos un nuevo DataFrame con los resultados
transformed_data = ohe.fit_transform(df[['color', 'talla']])
new_cols = ohe.get_feature_names_out(['color', 'talla'])
df_ohe = pd.DataFrame(transformed_data, columns=new_cols)

print(df_ohe)
"#,
    pros: &[
        "Se integra perfectamente con pipelines de Scikit-learn.",
        "Puede manejar categorías desconocidas (parámetro `handle_unknown`).",
        "Más configurable que `get_dummies`.",
    ],
    cons: &[
        "Un poco más complejo de implementar que `get_dummies`.",
        "Al igual que `get_dummies`, puede generar alta dimensionalidad.",
    ],
    original_rows: INITIAL_DATA,
    transformed_rows: &[
        &[("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("color_Azul", I(0)), ("color_Rojo", I(0)), ("color_Verde", I(1)), ("talla_L", I(1)), ("talla_M", I(0)), ("talla_S", I(0))],
        &[("color_Azul", I(1)), ("color_Rojo", I(0)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(0)), ("talla_S", I(1))],
    ],
    transformed_headers: &["color_Azul", "color_Rojo", "color_Verde", "talla_L", "talla_M", "talla_S"],
    note: Some("El resultado visual es idéntico a get_dummies, pero su poder reside en la integración con pipelines de sklearn."),
    forced_highlights: &[],
};

// ============================================================================
// ColumnTransformer
// ============================================================================

pub(super) static COLUMN_TRANSFORMER: ContentRecord = ContentRecord {
    variant: EncoderVariant::ColumnTransformer,
    nav_title: "ColumnTransformer",
    title: "sklearn.compose.ColumnTransformer",
    description: "Es la herramienta definitiva para el preprocesamiento. Permite aplicar diferentes transformaciones a diferentes columnas de tu dataset, todo en un solo paso. Por ejemplo, puedes aplicar One-Hot Encoding a las columnas categóricas y, al mismo tiempo, escalar las columnas numéricas.",
    code: r#"import pandas as pd
from sklearn.preprocessing import OneHotEncoder, StandardScaler
from sklearn.compose import ColumnTransformer

df = pd.DataFrame({
    'color': ['Rojo', 'Verde', 'Azul', 'Rojo'],
    'talla': ['M', 'L', 'M', 'S'],
    'precio': [15.50, 20.00, 17.25, 12.00]
})

# Definimos las columnas categóricas y numéricas
categorical_features = ['color', 'talla']
numerical_features = ['precio']

# Creamos el preprocesador
preprocessor = ColumnTransformer(
    transformers=[
        ('num', StandardScaler(), numerical_features),
        ('cat', OneHotEncoder(), categorical_features)
    ])

# Aplicamos el transformador
transformed_data = preprocessor.fit_transform(df)

print(transformed_data) # El resultado es un array de NumPy
"#,
    pros: &[
        "Organiza todo el preprocesamiento en un solo objeto.",
        "Evita la fuga de datos (data leakage) al aplicar `fit` solo en datos de entrenamiento.",
        "Esencial para crear pipelines de ML robustos y reproducibles.",
    ],
    cons: &[
        "Requiere una mayor configuración inicial.",
        "La salida es un array de NumPy, perdiendo los nombres de las columnas (se pueden recuperar).",
    ],
    original_rows: INITIAL_DATA,
    transformed_rows: &[
        &[("precio_scaled", F(-0.32)), ("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("precio_scaled", F(1.48)), ("color_Azul", I(0)), ("color_Rojo", I(0)), ("color_Verde", I(1)), ("talla_L", I(1)), ("talla_M", I(0)), ("talla_S", I(0))],
        &[("precio_scaled", F(0.30)), ("color_Azul", I(1)), ("color_Rojo", I(0)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(1)), ("talla_S", I(0))],
        &[("precio_scaled", F(-1.46)), ("color_Azul", I(0)), ("color_Rojo", I(1)), ("color_Verde", I(0)), ("talla_L", I(0)), ("talla_M", I(0)), ("talla_S", I(1))],
    ],
    transformed_headers: &["precio_scaled", "color_Azul", "color_Rojo", "color_Verde", "talla_L", "talla_M", "talla_S"],
    note: Some("ColumnTransformer ha aplicado StandardScaler a \"precio\" y OneHotEncoder a \"color\" y \"talla\" en un solo paso."),
    forced_highlights: &[],
};
